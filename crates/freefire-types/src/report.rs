//! The finished report handed to the delivery layer.

use serde::{Deserialize, Serialize};

/// Accent colour for the report embed (gold).
pub const ACCENT_COLOUR: u32 = 0xF1C4_0F;

/// Footer label attached to every report.
pub const FOOTER_LABEL: &str = "UniqueTopup";

/// Rendered profile report: text plus presentation metadata.
///
/// Produced once per successful lookup; ownership passes to whatever
/// delivers it (the bot turns it into a Discord embed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Full report body, already formatted section by section.
    pub text: String,
    /// Embed accent colour.
    pub accent_colour: u32,
    /// Embed footer label.
    pub footer: String,
}
