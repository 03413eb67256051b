pub use stakingtypecrate::constants::*;
