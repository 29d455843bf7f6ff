pub mod error;
pub mod generators;
pub mod grid;
pub mod noise;
pub mod random;
pub mod rect;
pub mod request;
pub mod surface;

pub use error::{GenerationError, GenerationResult};
pub use generators::*;
pub use grid::{Cell, Grid};
pub use random::SeededRandom;
pub use rect::{Rect, overlap_1d};
pub use request::{Algorithm, GeneratedLevel, LevelRequest, generate};
pub use surface::{TileSurface, compose_walls, erase, rasterize};
