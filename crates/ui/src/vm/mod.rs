mod game_vm;
mod result_vm;

pub use game_vm::{GameScreenVm, GameVm, start_game};
pub use result_vm::{ResultScreenVm, map_result_screen};
