mod roster_view;
pub use roster_view::RosterView;
