//! Query and view types for a single profile lookup.
//!
//! `ProfileQuery` is built once per invocation and never mutated.
//! `ProfileView` is the flat, fully-resolved shape the renderer reads:
//! every field carries a value, missing data is substituted during
//! extraction and never reaches rendering as an absence.

use serde::{Deserialize, Serialize};

/// Placeholder for text fields the response did not carry.
pub const MISSING: &str = "Not found";
/// Placeholder for numeric fields the response did not carry.
pub const UNKNOWN: &str = "?";
/// Placeholder for an unset account signature.
pub const NO_SIGNATURE: &str = "None";
/// Placeholder for an absent equipped-skills list.
pub const NO_SKILLS: &str = "[]";

/// Parameters of one remote profile lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileQuery {
    /// Target player UID (digits only, validated upstream).
    pub uid: String,
    /// Service region code, e.g. "bd".
    pub region: String,
    /// Service-issued user identifier credential.
    pub user_uid: String,
    /// Service-issued API key credential.
    pub api_key: String,
}

impl ProfileQuery {
    pub fn new(uid: &str, region: &str, user_uid: &str, api_key: &str) -> Self {
        Self {
            uid: uid.to_string(),
            region: region.to_string(),
            user_uid: user_uid.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

/// Flat view of an account profile with every field resolved.
///
/// `Default` yields the documented placeholder for each field, so the view
/// of an empty response is exactly `ProfileView::default()` with the uid
/// and region filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    /// Requested UID, echoed from the query (the response may omit it).
    pub uid: String,
    /// Region code, echoed from configuration.
    pub region: String,

    // ── Account basic ─────────────────────────────────────────────────────
    pub name: String,
    pub level: String,
    pub exp: String,
    pub likes: String,
    pub honor_score: String,
    pub signature: String,

    // ── Account activity ──────────────────────────────────────────────────
    pub release_version: String,
    pub badge_count: String,
    pub br_rank_points: String,
    pub cs_rank_points: String,
    pub created_at: String,
    pub last_login: String,

    // ── Account overview ──────────────────────────────────────────────────
    pub avatar_id: String,
    pub banner_id: String,
    pub pin_id: String,
    pub equipped_skills: String,

    // ── Pet ───────────────────────────────────────────────────────────────
    pub pet_equipped: bool,
    pub pet_name: String,
    pub pet_exp: String,
    pub pet_level: String,

    // ── Guild ─────────────────────────────────────────────────────────────
    pub guild_name: String,
    pub guild_id: String,
    pub guild_level: String,
    pub guild_members: String,
    pub guild_capacity: String,

    // ── Guild leader ──────────────────────────────────────────────────────
    pub leader_name: String,
    pub leader_id: String,
    pub leader_level: String,
    pub leader_exp: String,
    pub leader_last_login: String,
    pub leader_title: String,
    pub leader_badge_count: String,
    pub leader_br_points: String,
    pub leader_cs_points: String,
}

impl Default for ProfileView {
    fn default() -> Self {
        Self {
            uid: String::new(),
            region: String::new(),

            name: MISSING.to_string(),
            level: UNKNOWN.to_string(),
            exp: UNKNOWN.to_string(),
            likes: UNKNOWN.to_string(),
            honor_score: UNKNOWN.to_string(),
            signature: NO_SIGNATURE.to_string(),

            release_version: UNKNOWN.to_string(),
            badge_count: UNKNOWN.to_string(),
            br_rank_points: UNKNOWN.to_string(),
            cs_rank_points: UNKNOWN.to_string(),
            created_at: MISSING.to_string(),
            last_login: MISSING.to_string(),

            avatar_id: MISSING.to_string(),
            banner_id: MISSING.to_string(),
            pin_id: MISSING.to_string(),
            equipped_skills: NO_SKILLS.to_string(),

            pet_equipped: false,
            pet_name: MISSING.to_string(),
            pet_exp: MISSING.to_string(),
            pet_level: MISSING.to_string(),

            guild_name: MISSING.to_string(),
            guild_id: MISSING.to_string(),
            guild_level: MISSING.to_string(),
            guild_members: UNKNOWN.to_string(),
            guild_capacity: UNKNOWN.to_string(),

            leader_name: MISSING.to_string(),
            leader_id: MISSING.to_string(),
            leader_level: UNKNOWN.to_string(),
            leader_exp: UNKNOWN.to_string(),
            leader_last_login: MISSING.to_string(),
            leader_title: MISSING.to_string(),
            leader_badge_count: UNKNOWN.to_string(),
            leader_br_points: UNKNOWN.to_string(),
            leader_cs_points: UNKNOWN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_copied_verbatim() {
        let q = ProfileQuery::new("123456789", "bd", "svc-1", "key-1");
        assert_eq!(q.uid, "123456789");
        assert_eq!(q.region, "bd");
        assert_eq!(q.user_uid, "svc-1");
        assert_eq!(q.api_key, "key-1");
    }

    #[test]
    fn test_default_view_uses_documented_placeholders() {
        let view = ProfileView::default();
        assert_eq!(view.name, MISSING);
        assert_eq!(view.level, UNKNOWN);
        assert_eq!(view.signature, NO_SIGNATURE);
        assert_eq!(view.equipped_skills, NO_SKILLS);
        assert_eq!(view.created_at, MISSING);
        assert!(!view.pet_equipped);
        assert_eq!(view.guild_members, UNKNOWN);
        assert_eq!(view.leader_title, MISSING);
        assert_eq!(view.leader_br_points, UNKNOWN);
    }

    #[test]
    fn test_view_serde_roundtrip() {
        let view = ProfileView {
            uid: "42".to_string(),
            name: "Player1".to_string(),
            ..ProfileView::default()
        };
        let json = serde_json::to_string(&view).expect("serialize");
        let back: ProfileView = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, view);
    }
}
