// Domain models (ported from the original clan bot)

mod clan;
mod member;

pub use clan::{ClanInfo, ClanSummary, HighestLevelMember, MemberStats};
pub use member::{MemberRecord, ONLINE_WINDOW_SECS, OnlineStatus};
