mod match_game;
mod player;
mod team;
