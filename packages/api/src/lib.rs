//! # API crate — shared fullstack server functions for duolog
//!
//! Every Dioxus server function the web and mobile frontends call lives
//! here, along with the supporting modules.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Password hashing (Argon2id) and session access |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`error`] | `server` | Internal error type shared by the server-side helpers |
//! | [`models`] | — | Database rows and their client-safe projections |
//!
//! ## Server functions exposed here
//!
//! Each public `async fn` below is compiled twice: once with the full server
//! logic and once as a thin client stub that forwards the call over HTTP.
//!
//! - **Accounts**: `get_current_user`, `register`, `login`, `logout`
//! - **Pairing**: `search_users`, `send_pair_request`, `incoming_requests`,
//!   `respond_pair_request`, `get_partner_status`, `break_up`
//! - **Records**: `list_records`, `get_record`, `create_record`,
//!   `update_record`, `delete_record`
//! - **Places**: `search_places`

use chrono::NaiveDateTime;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

pub mod auth;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;

pub use model::{Candidate, GeoPoint, PairRequest, PartnerInfo, Place, Record, RelationKind};
pub use models::UserInfo;

use model::RecordDraft;

/// Fields captured by the write form, sent as one unit on submit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordInput {
    pub place_name: String,
    pub visited_at: NaiveDateTime,
    pub menus: Vec<String>,
    pub amount: i64,
    pub category: String,
    pub score: u8,
    pub is_dutch: bool,
}

impl RecordInput {
    /// Capture a draft's fields as they stand.
    pub fn from_draft(draft: &RecordDraft) -> Self {
        Self {
            place_name: draft.place_name.trim().to_string(),
            visited_at: draft.visited_at,
            menus: draft.menus(),
            amount: draft.amount,
            category: draft.category.clone(),
            score: draft.score,
            is_dutch: draft.is_dutch,
        }
    }
}

/// One page of records plus whether older ones remain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordPage {
    pub records: Vec<Record>,
    pub has_more: bool,
}

/// Search hits plus the caller's open outgoing requests, fetched together so
/// the row rules can be applied in one place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchOutcome {
    pub candidates: Vec<Candidate>,
    pub pending: Vec<PairRequest>,
}

/// Everything the couple card needs in one round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartnerStatusInfo {
    pub partner: Option<PartnerInfo>,
    /// Nickname of the user an open couple request was sent to, if any.
    pub requested_name: Option<String>,
    pub friends: Vec<PartnerInfo>,
}

/// Look up which couple a user belongs to, if any.
#[cfg(feature = "server")]
async fn couple_of(
    pool: &sqlx::PgPool,
    user_id: uuid::Uuid,
) -> Result<Option<uuid::Uuid>, sqlx::Error> {
    let row: (Option<uuid::Uuid>,) = sqlx::query_as("SELECT couple_id FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

/// Get the current authenticated user from the session.
#[server(GetCurrentUser)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    let user_id = auth::current_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

/// Register a new account with email, password, and nickname.
#[server(Register)]
pub async fn register(
    email: String,
    password: String,
    nickname: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let email = email.trim().to_lowercase();
    let nickname = nickname.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }
    if nickname.is_empty() {
        return Err(ServerFnError::new("Nickname is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if the email is already taken
    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 AS n FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash =
        auth::hash_password(&password).map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (email, nickname, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&email)
    .bind(&nickname)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

/// Log in with email and password.
#[server(Login)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

/// Log out the current user by clearing the session.
#[server(Logout)]
pub async fn logout() -> Result<(), ServerFnError> {
    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

/// Search users by nickname for the given relation. Candidates already
/// unmatchable for that relation (coupled users for a couple search,
/// existing friends for a friend search) are excluded server side; the
/// caller's open outgoing requests ride along for the client-side row rules.
#[server(SearchUsers)]
pub async fn search_users(
    keyword: String,
    relation: RelationKind,
) -> Result<SearchOutcome, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::{CandidateRow, PairRequestRow};

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    let user_id = auth::require_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let keyword = keyword.trim().to_string();

    let sql = match relation {
        RelationKind::Couple => {
            "SELECT u.id, u.nickname, u.couple_id,
                    COALESCE(ARRAY_AGG(f.friend_id) FILTER (WHERE f.friend_id IS NOT NULL), '{}') AS friend_ids
             FROM users u
             LEFT JOIN friendships f ON f.user_id = u.id
             WHERE u.id <> $1
               AND u.couple_id IS NULL
               AND ($2 = '' OR u.nickname ILIKE '%' || $2 || '%')
             GROUP BY u.id
             ORDER BY u.nickname
             LIMIT 30"
        }
        RelationKind::Friend => {
            "SELECT u.id, u.nickname, u.couple_id,
                    COALESCE(ARRAY_AGG(f.friend_id) FILTER (WHERE f.friend_id IS NOT NULL), '{}') AS friend_ids
             FROM users u
             LEFT JOIN friendships f ON f.user_id = u.id
             WHERE u.id <> $1
               AND NOT EXISTS (
                   SELECT 1 FROM friendships mine
                   WHERE mine.user_id = $1 AND mine.friend_id = u.id
               )
               AND ($2 = '' OR u.nickname ILIKE '%' || $2 || '%')
             GROUP BY u.id
             ORDER BY u.nickname
             LIMIT 30"
        }
    };

    let rows: Vec<CandidateRow> = sqlx::query_as(sql)
        .bind(user_id)
        .bind(&keyword)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pending_rows: Vec<PairRequestRow> = sqlx::query_as(
        "SELECT r.id, r.requester_id, ru.nickname AS requester_name,
                r.target_id, tu.nickname AS target_name,
                r.relation, r.accepted, r.completed
         FROM pair_requests r
         JOIN users ru ON ru.id = r.requester_id
         JOIN users tu ON tu.id = r.target_id
         WHERE r.requester_id = $1 AND r.accepted IS NULL AND NOT r.completed
         ORDER BY r.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let candidates = rows.iter().map(CandidateRow::to_candidate).collect();
    let pending = pending_rows
        .iter()
        .map(PairRequestRow::to_request)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerFnError::new(e))?;

    Ok(SearchOutcome {
        candidates,
        pending,
    })
}

/// Create a pairing request toward another user.
#[server(SendPairRequest)]
pub async fn send_pair_request(
    target_id: String,
    relation: RelationKind,
) -> Result<PairRequest, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::PairRequestRow;

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    let user_id = auth::require_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let target_uuid =
        uuid::Uuid::parse_str(&target_id).map_err(|e| ServerFnError::new(e.to_string()))?;
    if target_uuid == user_id {
        return Err(ServerFnError::new("Cannot send a request to yourself"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if relation == RelationKind::Couple {
        let mine = couple_of(pool, user_id)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        if mine.is_some() {
            return Err(ServerFnError::new("Already connected to a couple"));
        }

        let target: Option<(Option<uuid::Uuid>,)> =
            sqlx::query_as("SELECT couple_id FROM users WHERE id = $1")
                .bind(target_uuid)
                .fetch_optional(pool)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?;
        let Some(target) = target else {
            return Err(ServerFnError::new("User not found"));
        };
        if target.0.is_some() {
            return Err(ServerFnError::new("This user is already in a couple"));
        }
    }

    let open: Option<(i32,)> = sqlx::query_as(
        "SELECT 1 AS n FROM pair_requests
         WHERE requester_id = $1 AND target_id = $2
           AND accepted IS NULL AND NOT completed",
    )
    .bind(user_id)
    .bind(target_uuid)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if open.is_some() {
        return Err(ServerFnError::new(
            "A request to this user is already waiting",
        ));
    }

    let (request_id,): (uuid::Uuid,) = sqlx::query_as(
        "INSERT INTO pair_requests (requester_id, target_id, relation)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(user_id)
    .bind(target_uuid)
    .bind(relation.as_str())
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: PairRequestRow = sqlx::query_as(
        "SELECT r.id, r.requester_id, ru.nickname AS requester_name,
                r.target_id, tu.nickname AS target_name,
                r.relation, r.accepted, r.completed
         FROM pair_requests r
         JOIN users ru ON ru.id = r.requester_id
         JOIN users tu ON tu.id = r.target_id
         WHERE r.id = $1",
    )
    .bind(request_id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    row.to_request().map_err(|e| ServerFnError::new(e))
}

/// Open requests addressed to the current user.
#[server(IncomingRequests)]
pub async fn incoming_requests() -> Result<Vec<PairRequest>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::PairRequestRow;

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    let user_id = auth::require_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<PairRequestRow> = sqlx::query_as(
        "SELECT r.id, r.requester_id, ru.nickname AS requester_name,
                r.target_id, tu.nickname AS target_name,
                r.relation, r.accepted, r.completed
         FROM pair_requests r
         JOIN users ru ON ru.id = r.requester_id
         JOIN users tu ON tu.id = r.target_id
         WHERE r.target_id = $1 AND r.accepted IS NULL AND NOT r.completed
         ORDER BY r.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    rows.iter()
        .map(PairRequestRow::to_request)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerFnError::new(e))
}

/// Accept or decline a request addressed to the current user. Accepting a
/// couple request links both accounts to a fresh couple; accepting a friend
/// request records the friendship in both directions.
#[server(RespondPairRequest)]
pub async fn respond_pair_request(request_id: String, accept: bool) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    let user_id = auth::require_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let request_uuid =
        uuid::Uuid::parse_str(&request_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<(uuid::Uuid, uuid::Uuid, String, Option<bool>, bool)> = sqlx::query_as(
        "SELECT requester_id, target_id, relation, accepted, completed
         FROM pair_requests WHERE id = $1 FOR UPDATE",
    )
    .bind(request_uuid)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some((requester_id, target_id, relation, accepted, completed)) = row else {
        return Err(ServerFnError::new("Request not found"));
    };
    if target_id != user_id {
        return Err(ServerFnError::new("This request is not addressed to you"));
    }
    if accepted.is_some() || completed {
        return Err(ServerFnError::new("This request was already answered"));
    }

    sqlx::query("UPDATE pair_requests SET accepted = $2, completed = TRUE WHERE id = $1")
        .bind(request_uuid)
        .bind(accept)
        .execute(&mut *tx)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if accept {
        if relation == "couple" {
            let (free,): (i64,) = sqlx::query_as(
                "SELECT COUNT(*) FROM users WHERE id IN ($1, $2) AND couple_id IS NULL",
            )
            .bind(requester_id)
            .bind(target_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

            if free != 2 {
                return Err(ServerFnError::new("One of you is already in a couple"));
            }

            let (couple_id,): (uuid::Uuid,) =
                sqlx::query_as("INSERT INTO couples DEFAULT VALUES RETURNING id")
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(|e| ServerFnError::new(e.to_string()))?;

            sqlx::query("UPDATE users SET couple_id = $1, updated_at = now() WHERE id IN ($2, $3)")
                .bind(couple_id)
                .bind(requester_id)
                .bind(target_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?;
        } else {
            sqlx::query(
                "INSERT INTO friendships (user_id, friend_id) VALUES ($1, $2), ($2, $1)
                 ON CONFLICT DO NOTHING",
            )
            .bind(requester_id)
            .bind(target_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        }
    }

    tx.commit()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

/// Everything the couple card needs: current partner, the open outgoing
/// couple request (if any), and the friends list.
#[server(GetPartnerStatus)]
pub async fn get_partner_status() -> Result<PartnerStatusInfo, ServerFnError> {
    use crate::db::get_pool;

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    let user_id = auth::require_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let couple_id = couple_of(pool, user_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let partner = if let Some(couple_id) = couple_id {
        let row: Option<(uuid::Uuid, String)> =
            sqlx::query_as("SELECT id, nickname FROM users WHERE couple_id = $1 AND id <> $2")
                .bind(couple_id)
                .bind(user_id)
                .fetch_optional(pool)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?;
        row.map(|(id, nickname)| PartnerInfo {
            user_id: id.to_string(),
            nickname,
        })
    } else {
        None
    };

    let requested_name: Option<(String,)> = sqlx::query_as(
        "SELECT tu.nickname FROM pair_requests r
         JOIN users tu ON tu.id = r.target_id
         WHERE r.requester_id = $1 AND r.relation = 'couple'
           AND r.accepted IS NULL AND NOT r.completed
         ORDER BY r.created_at DESC
         LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let friends: Vec<(uuid::Uuid, String)> = sqlx::query_as(
        "SELECT u.id, u.nickname FROM friendships f
         JOIN users u ON u.id = f.friend_id
         WHERE f.user_id = $1
         ORDER BY u.nickname",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(PartnerStatusInfo {
        partner,
        requested_name: requested_name.map(|r| r.0),
        friends: friends
            .into_iter()
            .map(|(id, nickname)| PartnerInfo {
                user_id: id.to_string(),
                nickname,
            })
            .collect(),
    })
}

/// Disconnect the current user's couple. Both accounts are unlinked; the
/// couple row and its records remain. A no-op when not paired.
#[server(BreakUp)]
pub async fn break_up() -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    let user_id = auth::require_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(couple_id) = couple_of(pool, user_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    else {
        return Ok(());
    };

    sqlx::query("UPDATE users SET couple_id = NULL, updated_at = now() WHERE couple_id = $1")
        .bind(couple_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

/// One page of the couple's records, newest visit first. Pass the last
/// row's `visited_at` and `id` back as the cursor to fetch the next page.
#[server(ListRecords)]
pub async fn list_records(
    before_visited_at: Option<NaiveDateTime>,
    before_id: Option<String>,
    limit: u32,
) -> Result<RecordPage, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::RecordRow;

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    let user_id = auth::require_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(couple_id) = couple_of(pool, user_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    else {
        return Ok(RecordPage {
            records: Vec::new(),
            has_more: false,
        });
    };

    let limit = limit.clamp(1, 50) as i64;
    let before_id = match before_id {
        Some(id) => {
            Some(uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?)
        }
        None => None,
    };

    // Fetch one row past the page to learn whether older records remain.
    let mut rows: Vec<RecordRow> = sqlx::query_as(
        "SELECT * FROM records
         WHERE couple_id = $1
           AND ($2::timestamp IS NULL OR (visited_at, id) < ($2, $3))
         ORDER BY visited_at DESC, id DESC
         LIMIT $4",
    )
    .bind(couple_id)
    .bind(before_visited_at)
    .bind(before_id)
    .bind(limit + 1)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let has_more = rows.len() as i64 > limit;
    rows.truncate(limit as usize);

    Ok(RecordPage {
        records: rows.iter().map(RecordRow::to_record).collect(),
        has_more,
    })
}

/// Fetch one record if it belongs to the caller's couple.
#[server(GetRecord)]
pub async fn get_record(record_id: String) -> Result<Option<Record>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::RecordRow;

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    let user_id = auth::require_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(couple_id) = couple_of(pool, user_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    else {
        return Ok(None);
    };

    let record_uuid =
        uuid::Uuid::parse_str(&record_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<RecordRow> =
        sqlx::query_as("SELECT * FROM records WHERE id = $1 AND couple_id = $2")
            .bind(record_uuid)
            .bind(couple_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|r| r.to_record()))
}

/// Store a new record for the caller's couple.
#[server(CreateRecord)]
pub async fn create_record(input: RecordInput) -> Result<Record, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::RecordRow;

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    let user_id = auth::require_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(couple_id) = couple_of(pool, user_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    else {
        return Err(ServerFnError::new("No couple connected"));
    };

    if input.place_name.trim().is_empty() {
        return Err(ServerFnError::new("Place name is required"));
    }
    if input.amount <= 0 {
        return Err(ServerFnError::new("Amount must be positive"));
    }

    let row: RecordRow = sqlx::query_as(
        "INSERT INTO records
             (couple_id, author_id, place_name, visited_at, menus, amount, category, score, is_dutch)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING *",
    )
    .bind(couple_id)
    .bind(user_id)
    .bind(input.place_name.trim())
    .bind(input.visited_at)
    .bind(&input.menus)
    .bind(input.amount)
    .bind(&input.category)
    .bind(input.score.min(5) as i16)
    .bind(input.is_dutch)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_record())
}

/// Update an existing record in place.
#[server(UpdateRecord)]
pub async fn update_record(record_id: String, input: RecordInput) -> Result<Record, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::RecordRow;

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    let user_id = auth::require_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(couple_id) = couple_of(pool, user_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    else {
        return Err(ServerFnError::new("No couple connected"));
    };

    let record_uuid =
        uuid::Uuid::parse_str(&record_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    if input.place_name.trim().is_empty() {
        return Err(ServerFnError::new("Place name is required"));
    }
    if input.amount <= 0 {
        return Err(ServerFnError::new("Amount must be positive"));
    }

    let row: Option<RecordRow> = sqlx::query_as(
        "UPDATE records
         SET place_name = $3, visited_at = $4, menus = $5, amount = $6,
             category = $7, score = $8, is_dutch = $9, updated_at = now()
         WHERE id = $1 AND couple_id = $2
         RETURNING *",
    )
    .bind(record_uuid)
    .bind(couple_id)
    .bind(input.place_name.trim())
    .bind(input.visited_at)
    .bind(&input.menus)
    .bind(input.amount)
    .bind(&input.category)
    .bind(input.score.min(5) as i16)
    .bind(input.is_dutch)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(row) = row else {
        return Err(ServerFnError::new("Record not found"));
    };

    Ok(row.to_record())
}

/// Delete a record.
#[server(DeleteRecord)]
pub async fn delete_record(record_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let session: tower_sessions::Session =
        extract().await.map_err(|(_, e)| ServerFnError::new(e))?;
    let user_id = auth::require_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(couple_id) = couple_of(pool, user_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    else {
        return Err(ServerFnError::new("No couple connected"));
    };

    let record_uuid =
        uuid::Uuid::parse_str(&record_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("DELETE FROM records WHERE id = $1 AND couple_id = $2")
        .bind(record_uuid)
        .bind(couple_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Record not found"));
    }

    Ok(())
}

/// Keyword search over the seeded place directory, nearest hits first when a
/// reference point is given. An empty keyword returns an empty list without
/// touching the database.
#[server(SearchPlaces)]
pub async fn search_places(
    keyword: String,
    near: Option<GeoPoint>,
) -> Result<Vec<Place>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::PlaceRow;

    let keyword = keyword.trim().to_string();
    if keyword.is_empty() {
        return Ok(Vec::new());
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (latitude, longitude) = match near {
        Some(point) => (Some(point.latitude), Some(point.longitude)),
        None => (None, None),
    };

    // The directory is small; squared planar distance is plenty for ranking.
    let rows: Vec<PlaceRow> = sqlx::query_as(
        "SELECT id, name, address, latitude, longitude FROM places
         WHERE name ILIKE '%' || $1 || '%' OR address ILIKE '%' || $1 || '%'
         ORDER BY CASE WHEN $2::float8 IS NULL THEN 0
                       ELSE (latitude - $2) * (latitude - $2)
                          + (longitude - $3) * (longitude - $3)
                  END,
                  name
         LIMIT 20",
    )
    .bind(&keyword)
    .bind(latitude)
    .bind(longitude)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(PlaceRow::to_place).collect())
}
