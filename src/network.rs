//! Network and identity constants for the FoodFlash SDK.

use crate::shared::UserId;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// The fixed user every order and history fetch is issued for.
pub const DEFAULT_USER_ID: UserId = UserId::new(1);
