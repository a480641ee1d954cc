mod event;
mod match_game;
mod player;
mod season;
mod team;
mod tournament;
