pub mod post;
pub mod showcase;
pub mod view_state;

pub use post::Post;
pub use view_state::ViewState;
