use anyhow::Result;

// Placeholder until the session inspection queries land; a real
// implementation would connect and read pg_stat_activity.
pub fn handle() -> Result<()> {
    println!("This is a placeholder for the 'analyze_session' tool.");
    println!("This tool would typically inspect active or recent database sessions for anomalies.");
    Ok(())
}
