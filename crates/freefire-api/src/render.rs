//! Report rendering: `ProfileView` → `Report`.
//!
//! Pure transformation. The section layout is a compatibility contract for
//! deployments that parse the report text, so lines are emitted in a fixed
//! order with fixed labels.

use freefire_types::report::{ACCENT_COLOUR, FOOTER_LABEL};
use freefire_types::{ProfileView, Report};

/// Render the fixed multi-section report for `view`.
pub fn render(view: &ProfileView) -> Report {
    let text = format!(
        "**Player Information**\n\
         \n\
         **┌ ACCOUNT BASIC INFO**\n\
         ├─ Name: {name}\n\
         ├─ UID: {uid}\n\
         ├─ Level: {level}\n\
         ├─ Region: {region}\n\
         ├─ Exp: {exp}\n\
         ├─ Likes: {likes}\n\
         ├─ Honor Score: {honor}\n\
         └─ Signature: {signature}\n\
         \n\
         **┌ ACCOUNT ACTIVITY**\n\
         ├─ OB Version: {release}\n\
         ├─ BP Badges: {badges}\n\
         ├─ BR Rank Points: {br_points}\n\
         ├─ CS Rank Points: {cs_points}\n\
         ├─ Created At: {created}\n\
         └─ Last Login: {last_login}\n\
         \n\
         **┌ ACCOUNT OVERVIEW**\n\
         ├─ Avatar ID: {avatar}\n\
         ├─ Banner ID: {banner}\n\
         ├─ Pin ID: {pin}\n\
         └─ Equipped Skills: {skills}\n\
         \n\
         **┌ PET DETAILS**\n\
         ├─ Equipped: {pet_equipped}\n\
         ├─ Name: {pet_name}\n\
         ├─ Exp: {pet_exp}\n\
         └─ Level: {pet_level}\n\
         \n\
         **┌ GUILD INFO**\n\
         ├─ Guild Name: {guild_name}\n\
         ├─ Guild ID: {guild_id}\n\
         ├─ Guild Level: {guild_level}\n\
         └─ Members: {members}/{capacity}\n\
         \n\
         **┌ LEADER INFO**\n\
         ├─ Name: {leader_name}\n\
         ├─ UID: {leader_id}\n\
         ├─ Level: {leader_level}\n\
         ├─ Exp: {leader_exp}\n\
         ├─ Last Login: {leader_login}\n\
         ├─ Title: {leader_title}\n\
         ├─ BP Badges: {leader_badges}\n\
         ├─ BR Rank Points: {leader_br}\n\
         └─ CS Rank Points: {leader_cs}\n\
         \n\
         ━━━━━━━━━━━━━━━━━━\n\
         💎 **Buy Instant FF Likes**\n\
         🔗 https://uniquetopup.com/\n\
         📞 +880 1716-720487\n\
         ━━━━━━━━━━━━━━━━━━",
        name = view.name,
        uid = view.uid,
        level = view.level,
        region = view.region.to_uppercase(),
        exp = view.exp,
        likes = view.likes,
        honor = view.honor_score,
        signature = view.signature,
        release = view.release_version,
        badges = view.badge_count,
        br_points = view.br_rank_points,
        cs_points = view.cs_rank_points,
        created = view.created_at,
        last_login = view.last_login,
        avatar = view.avatar_id,
        banner = view.banner_id,
        pin = view.pin_id,
        skills = view.equipped_skills,
        pet_equipped = if view.pet_equipped { "Yes" } else { "No" },
        pet_name = view.pet_name,
        pet_exp = view.pet_exp,
        pet_level = view.pet_level,
        guild_name = view.guild_name,
        guild_id = view.guild_id,
        guild_level = view.guild_level,
        members = view.guild_members,
        capacity = view.guild_capacity,
        leader_name = view.leader_name,
        leader_id = view.leader_id,
        leader_level = view.leader_level,
        leader_exp = view.leader_exp,
        leader_login = view.leader_last_login,
        leader_title = view.leader_title,
        leader_badges = view.leader_badge_count,
        leader_br = view.leader_br_points,
        leader_cs = view.leader_cs_points,
    );

    Report {
        text,
        accent_colour: ACCENT_COLOUR,
        footer: FOOTER_LABEL.to_string(),
    }
}
