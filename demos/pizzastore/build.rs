fn main() -> Result<(), forge_scan::ScanError> {
    forge_scan::Builder::new().run()?;
    Ok(())
}
