//! This module provides reusable test utilities:
//! - Mock Camera Directory Service (wiremock)
//! - Test configuration builder
//! - Camera test data

// Allow unused code in test fixtures - not every test binary uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_directory;
pub mod test_config;
pub mod test_data;

// Re-export commonly used items
pub use mock_directory::MockDirectoryServer;
pub use test_config::TestConfigBuilder;
pub use test_data::*;
