mod show;

pub use show::ShowCommands;
