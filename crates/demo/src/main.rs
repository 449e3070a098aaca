use anyhow::Context;

use registrar_academics::{Course, Instructor, Student};
use registrar_registry::{Registry, RegistryConfig};

fn main() -> anyhow::Result<()> {
    registrar_observability::init();

    let config = RegistryConfig::from_env().context("invalid registrar configuration")?;
    tracing::info!(removal_policy = ?config.removal_policy, "starting registrar demo");

    let mut registry = Registry::with_config(config);
    registry.add_student(Student::new("Ada", "S1", "CS"));
    registry.add_instructor(Instructor::new("Grace", "I1", "Computing"));
    registry.add_course(Course::new("Algorithms", "C1"));

    registry.enroll_student("S1", "C1")?;
    registry.assign_grade("C1", "S1", "A")?;

    if let Err(err) = registry.assign_grade("C1", "S1", "Z") {
        tracing::warn!(error = %err, "rejected grade");
    }

    println!("{}", registry.find_course("C1")?);
    println!("{}", registry.find_student("S1")?);
    println!("{}", registry.find_enrollment("C1", "S1")?);

    let history = serde_json::to_string_pretty(registry.history())
        .context("failed to render registry history")?;
    println!("{history}");

    Ok(())
}
