//! GitHub adapter: contribution calendar over the GraphQL API.

mod graphql;

pub use graphql::{GithubConfig, GithubContributionClient};
