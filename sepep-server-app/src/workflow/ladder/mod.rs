pub mod neighbourhoods;
pub mod standings;
