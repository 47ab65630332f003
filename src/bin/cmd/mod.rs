pub mod default;
pub mod post_cmd;
pub mod proposal_cmd;
pub mod skill_cmd;
