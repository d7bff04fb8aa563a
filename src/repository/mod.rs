mod games;
mod lobbies;
mod players;

pub use games::GameRepository;
pub use lobbies::LobbyRepository;
pub use players::PlayerRepository;
