//! User settings panels.

mod ai_bidding;
mod bid_log;
mod password;
mod profiles;
mod skills;
mod skillsets;

pub use ai_bidding::{AiBiddingSettings, AiField, AiNumberError, Country, Deposit, MinRating, Verification};
pub use bid_log::{BidLog, DailyBids, MonthLog};
pub use password::{PasswordError, PasswordField, PasswordForm};
pub use profiles::{APPLICABLE_SKILLS, Profile, ProfileEditor, ProfileError, ProfilesSettings};
pub use skills::{Skill, SkillsSettings, initial_included_skills};
pub use skillsets::{NO_SKILLS, ShowEntries, SkillSet, SkillSetDraft, SkillSetError, SkillsetsSettings};
