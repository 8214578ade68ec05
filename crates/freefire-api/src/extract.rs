//! Schema extraction: raw service payload → `ProfileView`.
//!
//! The payload is a nested mapping under a top-level `result` object whose
//! sub-objects may be missing wholesale. Every lookup here resolves to a
//! documented default when the key, or any ancestor, is absent, so the
//! extractor never fails and the renderer never sees an absence.
//! Scalar fields tolerate JSON strings, numbers, and booleans; the service
//! is not consistent about which it sends.

use serde_json::Value;

use crate::timestamp::normalize;
use freefire_types::profile::NO_SKILLS;
use freefire_types::ProfileView;

/// Map a raw response to a fully-resolved view.
///
/// `uid` and `region` are echoed from the request side verbatim; the
/// response copy of the uid is ignored even when present.
pub fn extract(raw: &Value, uid: &str, region: &str) -> ProfileView {
    let account = section(raw, "AccountInfo");
    let profile = section(raw, "AccountProfileInfo");
    let guild = section(raw, "GuildInfo");
    let pet = section(raw, "petInfo");
    let credit = section(raw, "creditScoreInfo");
    let social = section(raw, "socialinfo");
    let leader = section(raw, "captainBasicInfo");

    let defaults = ProfileView::default();

    ProfileView {
        uid: uid.to_string(),
        region: region.to_string(),

        name: scalar(account, "AccountName", defaults.name),
        level: scalar(account, "AccountLevel", defaults.level),
        exp: scalar(account, "AccountEXP", defaults.exp),
        likes: scalar(account, "AccountLikes", defaults.likes),
        honor_score: scalar(credit, "creditScore", defaults.honor_score),
        signature: scalar(social, "AccountSignature", defaults.signature),

        release_version: scalar(account, "ReleaseVersion", defaults.release_version),
        badge_count: scalar(account, "AccountBPBadges", defaults.badge_count),
        br_rank_points: scalar(account, "BrRankPoint", defaults.br_rank_points),
        cs_rank_points: scalar(account, "CsRankPoint", defaults.cs_rank_points),
        created_at: normalize(field(account, "AccountCreateTime")),
        last_login: normalize(field(account, "AccountLastLogin")),

        avatar_id: scalar(account, "AccountAvatarId", defaults.avatar_id),
        banner_id: scalar(account, "AccountBannerId", defaults.banner_id),
        pin_id: scalar(account, "AccountBPID", defaults.pin_id),
        equipped_skills: skill_list(field(profile, "EquippedSkills")),

        pet_equipped: flag(field(pet, "isSelected")),
        pet_name: scalar(pet, "name", defaults.pet_name),
        pet_exp: scalar(pet, "exp", defaults.pet_exp),
        pet_level: scalar(pet, "level", defaults.pet_level),

        guild_name: scalar(guild, "GuildName", defaults.guild_name),
        guild_id: scalar(guild, "GuildID", defaults.guild_id),
        guild_level: scalar(guild, "GuildLevel", defaults.guild_level),
        guild_members: scalar(guild, "GuildMember", defaults.guild_members),
        guild_capacity: scalar(guild, "GuildCapacity", defaults.guild_capacity),

        leader_name: scalar(leader, "nickname", defaults.leader_name),
        leader_id: scalar(leader, "accountId", defaults.leader_id),
        leader_level: scalar(leader, "level", defaults.leader_level),
        leader_exp: scalar(leader, "exp", defaults.leader_exp),
        leader_last_login: normalize(field(leader, "lastLoginAt")),
        leader_title: scalar(leader, "title", defaults.leader_title),
        leader_badge_count: scalar(leader, "badgeCnt", defaults.leader_badge_count),
        leader_br_points: scalar(leader, "rankingPoints", defaults.leader_br_points),
        leader_cs_points: scalar(leader, "csRankingPoints", defaults.leader_cs_points),
    }
}

/// Sub-object of the top-level `result` mapping, if present.
fn section<'a>(raw: &'a Value, name: &str) -> Option<&'a Value> {
    raw.get("result")?.get(name)
}

fn field<'a>(section: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    section?.get(key)
}

/// Scalar lookup with default substitution.
fn scalar(section: Option<&Value>, key: &str, default: String) -> String {
    field(section, key)
        .and_then(display_value)
        .unwrap_or(default)
}

/// Render a scalar JSON value for display. Objects, arrays, and null do
/// not qualify.
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Boolean flag tolerant of the shapes the service sends for "true".
fn flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        Some(Value::String(s)) => matches!(s.as_str(), "true" | "1"),
        _ => false,
    }
}

/// Equipped-skills array rendered as a bracketed list; anything that is
/// not an array collapses to the empty-collection representation.
fn skill_list(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => {
            let rendered: Vec<String> = items.iter().filter_map(display_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        _ => NO_SKILLS.to_string(),
    }
}
