//! Execute message handlers, split by concern.

mod admin;
mod config;
mod fulfill;
mod send;

pub use admin::{
    execute_grant_role, execute_pause, execute_revoke_role, execute_unpause, execute_withdraw,
};
pub use config::{
    execute_add_chains, execute_remove_chains, execute_set_fee, execute_set_fee_wallet,
    execute_set_limit_per_send, execute_set_relayers,
};
pub use fulfill::execute_fulfill;
pub use send::{execute_send, reply_send, SEND_REPLY_ID};
