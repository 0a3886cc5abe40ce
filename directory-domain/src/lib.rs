/*!
# Directory Domain

User directory integration for a Keycloak realm, laid out along hexagonal
architecture lines.

Accounts live in the identity provider, not in a local database. This crate
provisions them and assembles read-only user profiles from three provider
lookups: the base identity, its realm role mappings and its group
memberships. Every provider failure reaches callers as one
[`DirectoryError`](domain::errors::DirectoryError).

## Architecture

```text
┌─────────────────────────────────────────────────────────────┐
│                    Primary Adapters                         │
│                 HTTP API (Axum handlers)                    │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│                  Application Layer                          │
│  • DirectoryService (create_account, get_profile)           │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│                 Domain Layer (Ports)                        │
│  • IdentityProviderClient   • KeycloakConfig                │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│              Infrastructure Layer (Adapters)                │
│  • KeycloakIdentityProvider                                 │
└─────────────────────────────────────────────────────────────┘
```

## Usage

```rust,ignore
use directory_domain::{
    application::services::DirectoryService,
    domain::entities::AccountCreationRequest,
    infrastructure::adapters::KeycloakIdentityProvider,
};

let service = DirectoryService::new(
    Arc::new(KeycloakIdentityProvider::new(admin)),
    "my-realm",
);

service
    .create_account(&AccountCreationRequest::new("jdoe", "jdoe@example.com", "s3cret", "John", "Doe"))
    .await?;
let profile = service.get_profile(&user_id).await?;
```
*/

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::ports::*;
pub use application::services::*;
pub use domain::entities::*;
pub use domain::errors::*;
