pub mod initialize_pool;
pub mod fund_rewards;
pub mod invest;
pub mod claim_reward;
pub mod withdraw_unlocked;
pub mod open_sale;
pub mod close_sale;
pub mod set_treasury;
pub mod set_hard_cap;
pub mod emit_investment_quote;
pub mod emit_investor_summary;

pub use initialize_pool::*;
pub use fund_rewards::*;
pub use invest::*;
pub use claim_reward::*;
pub use withdraw_unlocked::*;
pub use open_sale::*;
pub use close_sale::*;
pub use set_treasury::*;
pub use set_hard_cap::*;
pub use emit_investment_quote::*;
pub use emit_investor_summary::*;
