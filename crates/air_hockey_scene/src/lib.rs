//! Air hockey scene: the table, the player's mallet and the puck, driven by presses, drags and frame updates.
//!
//! The host owns a [`Scene`] and a [`Camera`], feeds touches in as normalized device coordinates together with the
//! camera's inverted view-projection matrix, and calls [`Scene::advance`] once per rendered frame.

use air_hockey_logging::LogCategory;

const LOG_CAT : LogCategory = LogCategory::new("Scene");

mod result;
pub use result::*;

mod settings;
pub use settings::*;

mod table;
pub use table::*;

mod mallet;
pub use mallet::*;

mod puck;
pub use puck::*;

mod scene;
pub use scene::*;

mod camera;
pub use camera::*;

mod object_builder;
pub use object_builder::*;
