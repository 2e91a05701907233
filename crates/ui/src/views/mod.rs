mod game;
mod lost;
mod state;
mod title;
mod won;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use game::GameView;
pub use lost::LostView;
pub use state::ViewError;
pub use title::TitleView;
pub use won::WonView;
