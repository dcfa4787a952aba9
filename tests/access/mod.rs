mod guard;
mod menu;
