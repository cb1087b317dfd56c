pub mod hh;

#[cfg(test)]
pub mod mock_hh;
