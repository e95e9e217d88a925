use anyhow::Result;

// Placeholder until the statistics queries land; a real implementation would
// read pg_class and pg_statistic to find tables needing analysis.
pub fn handle() -> Result<()> {
    println!("This is a placeholder for the 'gpstatscheck' tool.");
    println!("This tool would check for missing or stale statistics on database tables.");
    Ok(())
}
