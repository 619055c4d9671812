mod contact;
mod order_item;
mod player_statistic;
mod squad;
mod ticket;
mod user;
