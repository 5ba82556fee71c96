use align_core::entities::MigrationPlan;

/// Handle `tcalign schema`: the JSON schema of the audit document.
pub fn handle() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(Vec<MigrationPlan>);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
