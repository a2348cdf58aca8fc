mod handoff;
mod list;
mod select;
mod ticker;
