//! A store backed by a hosted Supabase (PostgREST) database.
//!
//! Every call is a single HTTP request against `{base_url}/rest/v1/{table}`.
//! Filters are passed as PostgREST query parameters, e.g. `user_id=eq.3`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    Error,
    database_id::{DatabaseID, GoalID, TransactionID, UserID},
    goal::{NewSavingsGoal, SavingsGoal, SavingsGoalUpdate},
    store::{GoalStore, TransactionStore, UserStore},
    transaction::{NewTransaction, Transaction, TransactionQuery, TransactionUpdate},
    user::{NewUser, User},
};

/// The names of the remote tables.
#[derive(Debug, Clone, PartialEq)]
pub struct TableNames {
    /// The table holding [User]s.
    pub users: String,
    /// The table holding [Transaction]s.
    pub transactions: String,
    /// The table holding [SavingsGoal]s.
    pub goals: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            users: "usuarios".to_owned(),
            transactions: "transacciones".to_owned(),
            goals: "metas_ahorro".to_owned(),
        }
    }
}

/// The error body PostgREST sends with non-success responses.
#[derive(Debug, Deserialize)]
struct RemoteError {
    message: String,
}

/// Stores users, transactions and goals in a remote Supabase project.
///
/// Cloning the store is cheap, the underlying HTTP connection pool is shared.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: Client,
    rest_url: String,
    api_key: String,
    tables: TableNames,
}

impl SupabaseStore {
    /// Create a store for the project at `base_url` (e.g.
    /// `https://<project>.supabase.co`), authenticating with `api_key`.
    ///
    /// # Errors
    /// Returns [Error::Config] if `base_url` or `api_key` is empty or the HTTP
    /// client cannot be built.
    pub fn new(
        base_url: &str,
        api_key: &str,
        tables: TableNames,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let base_url = base_url.trim().trim_end_matches('/');

        if base_url.is_empty() {
            return Err(Error::Config("the store URL cannot be empty".to_owned()));
        }

        if api_key.trim().is_empty() {
            return Err(Error::Config("the store API key cannot be empty".to_owned()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| Error::Config(format!("could not build HTTP client: {error}")))?;

        Ok(Self {
            client,
            rest_url: format!("{base_url}/rest/v1"),
            api_key: api_key.trim().to_owned(),
            tables,
        })
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{}", self.rest_url, table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn select_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, Error> {
        tracing::debug!("Selecting from {table} where {params:?}");

        let response = self
            .request(Method::GET, table)
            .query(&[("select", "*")])
            .query(params)
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }

    async fn insert_row<B, T>(&self, table: &str, row: &B, record: &'static str) -> Result<T, Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!("Inserting into {table}");

        let response = self
            .request(Method::POST, table)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;

        let rows: Vec<T> = check_status(response).await?.json().await?;

        rows.into_iter().next().ok_or(Error::MissingRecord(record))
    }

    async fn update_row<B, T>(&self, table: &str, id: DatabaseID, changes: &B) -> Result<T, Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!("Updating row {id} in {table}");

        let response = self
            .request(Method::PATCH, table)
            .header("Prefer", "return=representation")
            .query(&[("id", format!("eq.{id}"))])
            .json(changes)
            .send()
            .await?;

        let rows: Vec<T> = check_status(response).await?.json().await?;

        rows.into_iter().next().ok_or(Error::NotFound)
    }

    async fn delete_row(&self, table: &str, id: DatabaseID) -> Result<(), Error> {
        tracing::debug!("Deleting row {id} from {table}");

        let response = self
            .request(Method::DELETE, table)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;

        check_status(response).await.map(|_| ())
    }
}

/// Pass successful responses through, turn the rest into [Error::Store].
async fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = remote_message(response.text().await);

    tracing::error!("The store responded with {status}: {message}");

    Err(Error::Store {
        status: status.as_u16(),
        message,
    })
}

/// The store's `message` field, the raw body if it has none, or why the body
/// could not be read.
fn remote_message<E: std::fmt::Display>(body: Result<String, E>) -> String {
    match body {
        Ok(body) => serde_json::from_str::<RemoteError>(&body)
            .map(|error| error.message)
            .unwrap_or(body),
        Err(error) => {
            tracing::error!("Could not read the error response from the store: {error}");
            format!("could not read the error response: {error}")
        }
    }
}

#[async_trait]
impl UserStore for SupabaseStore {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        let users: Vec<User> = self
            .select_rows(
                &self.tables.users,
                &[
                    ("username", format!("eq.{username}")),
                    ("limit", "1".to_owned()),
                ],
            )
            .await?;

        Ok(users.into_iter().next())
    }

    async fn create(&self, user: NewUser) -> Result<User, Error> {
        self.insert_row(&self.tables.users, &user, "user").await
    }
}

#[async_trait]
impl TransactionStore for SupabaseStore {
    async fn list(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error> {
        let mut params = vec![
            ("user_id", format!("eq.{}", query.user_id)),
            ("order", "fecha.desc".to_owned()),
        ];

        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }

        self.select_rows(&self.tables.transactions, &params).await
    }

    async fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        self.insert_row(&self.tables.transactions, &transaction, "transaction")
            .await
    }

    async fn update(
        &self,
        id: TransactionID,
        update: TransactionUpdate,
    ) -> Result<Transaction, Error> {
        self.update_row(&self.tables.transactions, id, &update).await
    }

    async fn delete(&self, id: TransactionID) -> Result<(), Error> {
        self.delete_row(&self.tables.transactions, id).await
    }
}

#[async_trait]
impl GoalStore for SupabaseStore {
    async fn list(&self, user_id: UserID) -> Result<Vec<SavingsGoal>, Error> {
        self.select_rows(
            &self.tables.goals,
            &[
                ("user_id", format!("eq.{user_id}")),
                ("order", "fecha_objetivo.asc".to_owned()),
            ],
        )
        .await
    }

    async fn create(&self, goal: NewSavingsGoal) -> Result<SavingsGoal, Error> {
        self.insert_row(&self.tables.goals, &goal, "goal").await
    }

    async fn update(&self, id: GoalID, update: SavingsGoalUpdate) -> Result<SavingsGoal, Error> {
        self.update_row(&self.tables.goals, id, &update).await
    }

    async fn delete(&self, id: GoalID) -> Result<(), Error> {
        self.delete_row(&self.tables.goals, id).await
    }
}
