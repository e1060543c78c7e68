pub mod demo_asset;
#[cfg(test)]
pub mod test_upstream;
