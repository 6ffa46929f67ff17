//! Static option tables for each category

use super::{Category, Complexity, StackOption};
use crate::error::StackError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Declares a category enum whose variants carry an id, display name,
/// complexity and description. The id is the string form used on the
/// command line, in presets and in JSON output.
macro_rules! stack_options {
    (
        $(#[$meta:meta])*
        $name:ident in $category:expr => {
            $( $variant:ident => ($id:literal, $display:literal, $complexity:ident, $desc:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every option, in catalog order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Category this option belongs to
            pub const CATEGORY: Category = $category;

            pub fn id(&self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }

            pub fn display_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $display),+
                }
            }

            pub fn description(&self) -> &'static str {
                match self {
                    $($name::$variant => $desc),+
                }
            }

            pub fn complexity(&self) -> Complexity {
                match self {
                    $($name::$variant => Complexity::$complexity),+
                }
            }

            pub fn option(&self) -> StackOption {
                StackOption {
                    id: self.id(),
                    display_name: self.display_name(),
                    description: self.description(),
                    complexity: self.complexity(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.display_name())
            }
        }

        impl FromStr for $name {
            type Err = StackError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id => Ok($name::$variant),)+
                    _ => Err(StackError::unknown_option($name::CATEGORY, s)),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.id())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

stack_options! {
    /// Programming languages the user works in
    Language in Category::Language => {
        TypeScript => ("typescript", "TypeScript", Beginner,
            "JavaScript with static types, the default for modern web projects."),
        JavaScript => ("javascript", "JavaScript", Beginner,
            "The language of the web, runs in every browser and on Node.js."),
        Python => ("python", "Python", Beginner,
            "Readable general-purpose language with a huge web and data ecosystem."),
        Go => ("go", "Go", Intermediate,
            "Compiled language built for simple, fast network services."),
        Java => ("java", "Java", Intermediate,
            "Mature, strongly typed language behind many enterprise systems."),
        Rust => ("rust", "Rust", Advanced,
            "Memory-safe systems language with predictable performance."),
    }
}

stack_options! {
    /// Backend frameworks and backend-as-a-service providers
    Backend in Category::Backend => {
        NodejsExpress => ("nodejs-express", "Node.js Express", Beginner,
            "Minimal Node.js web framework with an extensive package ecosystem."),
        Django => ("django", "Django", Intermediate,
            "Python-based web framework with batteries included for rapid development."),
        FastApi => ("fastapi", "FastAPI", Intermediate,
            "Async Python framework with automatic OpenAPI documentation."),
        SpringBoot => ("springboot", "Spring Boot", Advanced,
            "Java-based framework for enterprise applications with strong typing."),
        Firebase => ("firebase", "Firebase", Beginner,
            "Google's backend-as-a-service with a bundled Firestore database."),
        Supabase => ("supabase", "Supabase", Beginner,
            "Open-source backend-as-a-service built on PostgreSQL."),
        Appwrite => ("appwrite", "Appwrite", Intermediate,
            "Self-hostable backend-as-a-service backed by MariaDB."),
        PocketBase => ("pocketbase", "PocketBase", Beginner,
            "Single-binary backend with an embedded SQLite database."),
    }
}

stack_options! {
    /// Databases, grouped roughly by family
    Database in Category::Database => {
        Postgres => ("postgres", "PostgreSQL", Beginner,
            "Powerful open-source relational database with strong consistency and advanced features."),
        MySql => ("mysql", "MySQL", Beginner,
            "Reliable relational database widely used for web applications."),
        MariaDb => ("mariadb", "MariaDB", Beginner,
            "Community fork of MySQL with a compatible wire protocol."),
        Oracle => ("oracle", "Oracle", Advanced,
            "Commercial relational database for large enterprise workloads."),
        MongoDb => ("mongodb", "MongoDB", Intermediate,
            "NoSQL document database offering flexible schemas and horizontal scalability."),
        CouchDb => ("couchdb", "CouchDB", Intermediate,
            "Document database with HTTP access and multi-master replication."),
        DynamoDb => ("dynamodb", "DynamoDB", Advanced,
            "Managed key-value and document database on AWS."),
        Firestore => ("firestore", "Firestore", Beginner,
            "Hosted document database included with Firebase."),
        Redis => ("redis", "Redis", Advanced,
            "High-performance in-memory data store for caching and real-time analytics."),
        Memcached => ("memcached", "Memcached", Intermediate,
            "Simple distributed memory cache."),
        Sqlite => ("sqlite", "SQLite", Beginner,
            "Embedded relational database stored in a single file."),
        DuckDb => ("duckdb", "DuckDB", Intermediate,
            "Embedded analytical database for fast local queries."),
        Neo4j => ("neo4j", "Neo4j", Advanced,
            "Graph database queried with Cypher."),
        ArangoDb => ("arangodb", "ArangoDB", Advanced,
            "Multi-model database for documents, graphs and key-value data."),
        InfluxDb => ("influxdb", "InfluxDB", Advanced,
            "Time series database for metrics and events."),
        TimescaleDb => ("timescaledb", "TimescaleDB", Advanced,
            "Time series extension running on PostgreSQL."),
        Elasticsearch => ("elasticsearch", "Elasticsearch", Advanced,
            "Distributed search and analytics engine."),
        OpenSearch => ("opensearch", "OpenSearch", Advanced,
            "Open-source fork of Elasticsearch."),
    }
}

stack_options! {
    /// Authentication methods and identity providers
    AuthMethod in Category::Auth => {
        Jwt => ("jwt", "JWT", Beginner,
            "Stateless token-based authentication using JSON Web Tokens for secure API access."),
        Paseto => ("paseto", "Paseto", Intermediate,
            "Platform-agnostic security tokens, a safer alternative to JWT."),
        OAuth => ("oauth", "OAuth 2.0", Intermediate,
            "Delegated authentication protocol allowing users to log in via third-party providers."),
        OpenId => ("openid", "OpenID Connect", Intermediate,
            "Identity layer on top of OAuth 2.0."),
        GoogleAuth => ("google-auth", "Google Auth", Beginner,
            "Sign in with a Google account."),
        GithubAuth => ("github-auth", "GitHub Auth", Beginner,
            "Sign in with a GitHub account."),
        Otp => ("otp", "OTP", Intermediate,
            "One-Time Password authentication using SMS or email for passwordless security."),
        MagicLink => ("magic-link", "Magic Link", Beginner,
            "Passwordless authentication via unique email links for frictionless access."),
        WebAuthn => ("webauthn", "WebAuthn", Advanced,
            "Passkey and hardware key authentication built into browsers."),
        FirebaseAuth => ("firebase-auth", "Firebase Auth", Beginner,
            "Authentication service bundled with Firebase."),
        SupabaseAuth => ("supabase-auth", "Supabase Auth", Beginner,
            "Authentication service bundled with Supabase."),
        Auth0 => ("auth0", "Auth0", Intermediate,
            "Hosted identity platform with many login providers."),
        Clerk => ("clerk", "Clerk", Beginner,
            "Drop-in user management and sign-in components."),
        Keycloak => ("keycloak", "Keycloak", Advanced,
            "Self-hosted open-source identity and access management."),
    }
}
