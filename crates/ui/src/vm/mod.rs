mod game_vm;
mod result_vm;
mod trap_vm;

pub use game_vm::{FeedbackVm, GameVm, OptionStyle, OptionVm, map_game};
pub use result_vm::{ResultVm, map_result};
pub use trap_vm::{ChefMood, TrapVm, map_trap};
