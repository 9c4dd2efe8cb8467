// sqlexec-core/src/application/invoker.rs

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

use crate::domain::arguments::{Action, SqlcmdArguments};
use crate::domain::profile::ConnectionProfile;
use crate::error::SqlexecError;
use crate::infrastructure::adapters::process::TokioProcessRunner;
use crate::ports::arguments::ArgumentBuilder;
use crate::ports::runner::{Invocation, ProcessRunner};

/// Runs the external client against one connection profile.
///
/// Every call spawns its own child process and awaits its exit; nothing is
/// shared between calls, so one invoker can serve concurrent tasks.
/// No timeout is applied here.
#[derive(Clone)]
pub struct CommandInvoker {
    profile: ConnectionProfile,
    runner: Arc<dyn ProcessRunner>,
    arguments: Arc<dyn ArgumentBuilder>,
}

impl CommandInvoker {
    pub fn new(profile: ConnectionProfile) -> Self {
        Self {
            profile,
            runner: Arc::new(TokioProcessRunner::new()),
            arguments: Arc::new(SqlcmdArguments),
        }
    }

    pub fn with_runner(mut self, runner: Arc<dyn ProcessRunner>) -> Self {
        self.runner = runner;
        self
    }

    pub fn with_argument_builder(mut self, arguments: Arc<dyn ArgumentBuilder>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn profile(&self) -> &ConnectionProfile {
        &self.profile
    }

    /// Runs `text` with `-Q`. `database` overrides the profile default.
    pub async fn run_query(&self, text: &str, database: Option<&str>) -> Result<i32, SqlexecError> {
        self.run(Action::Query(text), database).await
    }

    /// Runs the script at `path` with `-i`. The client opens the file, not us.
    pub async fn run_file(
        &self,
        path: impl AsRef<Path>,
        database: Option<&str>,
    ) -> Result<i32, SqlexecError> {
        self.run(Action::File(path.as_ref()), database).await
    }

    /// Validates inputs and assembles the call without launching it.
    pub fn prepare(
        &self,
        action: &Action<'_>,
        database: Option<&str>,
    ) -> Result<Invocation, SqlexecError> {
        action.validate()?;
        let database = self.profile.resolve_database(database)?;
        let arguments = self.arguments.build(&self.profile, database, action);
        Ok(Invocation::new(self.profile.executable(), arguments))
    }

    #[instrument(skip(self, action), fields(server = %self.profile.server()))]
    async fn run(&self, action: Action<'_>, database: Option<&str>) -> Result<i32, SqlexecError> {
        let invocation = self.prepare(&action, database)?;

        let start = Instant::now();
        info!("🚀 Launching: {}", invocation.redacted_command_line());

        match self.runner.run(&invocation).await {
            Ok(code) => {
                debug!(exit_code = code, "✅ Client exited after {:.2?}", start.elapsed());
                Ok(code)
            }
            Err(e) => {
                error!("❌ Client run failed after {:.2?}: {}", start.elapsed(), e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::profile::Authentication;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every invocation and answers with a fixed exit code.
    struct RecordingRunner {
        exit_code: i32,
        calls: Mutex<Vec<Invocation>>,
    }

    impl RecordingRunner {
        fn returning(exit_code: i32) -> Arc<Self> {
            Arc::new(Self {
                exit_code,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn command_lines(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(Invocation::command_line)
                .collect()
        }
    }

    #[async_trait]
    impl ProcessRunner for RecordingRunner {
        async fn run(&self, invocation: &Invocation) -> Result<i32, SqlexecError> {
            self.calls.lock().unwrap().push(invocation.clone());
            Ok(self.exit_code)
        }
    }

    fn invoker(profile: ConnectionProfile, runner: &Arc<RecordingRunner>) -> CommandInvoker {
        CommandInvoker::new(profile).with_runner(runner.clone())
    }

    #[tokio::test]
    async fn test_integrated_query_without_database() -> anyhow::Result<()> {
        let runner = RecordingRunner::returning(0);
        let invoker = invoker(ConnectionProfile::integrated("sqlcmd", "S1")?, &runner);

        invoker.run_query("SELECT 1", None).await?;

        let lines = runner.command_lines();
        insta::assert_snapshot!(lines[0], @r#"sqlcmd -S S1 -E -Q "SELECT 1""#);
        Ok(())
    }

    #[tokio::test]
    async fn test_login_query_uses_default_database() -> anyhow::Result<()> {
        let runner = RecordingRunner::returning(0);
        let profile =
            ConnectionProfile::with_credentials("sqlcmd", "S1", "u", "p")?.with_default_database("DB0")?;
        let invoker = invoker(profile, &runner);

        invoker.run_query("SELECT 1", None).await?;

        let lines = runner.command_lines();
        insta::assert_snapshot!(lines[0], @r#"sqlcmd -S S1 -U u -P p -d DB0 -Q "SELECT 1""#);
        Ok(())
    }

    #[tokio::test]
    async fn test_explicit_database_wins_over_default() -> anyhow::Result<()> {
        let runner = RecordingRunner::returning(0);
        let profile = ConnectionProfile::integrated("sqlcmd", "S1")?.with_default_database("DB0")?;
        let invoker = invoker(profile, &runner);

        invoker.run_query("SELECT 1", Some("DB9")).await?;

        assert_eq!(
            runner.command_lines(),
            vec![r#"sqlcmd -S S1 -E -d DB9 -Q "SELECT 1""#.to_string()]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_query_quotes_are_doubled() -> anyhow::Result<()> {
        let runner = RecordingRunner::returning(0);
        let invoker = invoker(ConnectionProfile::integrated("sqlcmd", "S1")?, &runner);

        invoker.run_query("SELECT \"x\"", None).await?;

        assert!(runner.command_lines()[0].ends_with(r#"-Q "SELECT ""x""""#));
        Ok(())
    }

    #[tokio::test]
    async fn test_run_file_with_database() -> anyhow::Result<()> {
        let runner = RecordingRunner::returning(0);
        let invoker = invoker(ConnectionProfile::integrated("sqlcmd", "S1")?, &runner);

        invoker.run_file("C:\\q.sql", Some("DB1")).await?;

        let lines = runner.command_lines();
        insta::assert_snapshot!(lines[0], @r#"sqlcmd -S S1 -E -d DB1 -i "C:\q.sql""#);
        Ok(())
    }

    #[tokio::test]
    async fn test_exit_code_is_returned_verbatim() -> anyhow::Result<()> {
        let runner = RecordingRunner::returning(7);
        let invoker = invoker(ConnectionProfile::integrated("sqlcmd", "S1")?, &runner);

        assert_eq!(invoker.run_query("SELECT 1", None).await?, 7);
        assert_eq!(invoker.run_file("q.sql", None).await?, 7);
        Ok(())
    }

    #[tokio::test]
    async fn test_validation_happens_before_launch() -> anyhow::Result<()> {
        let runner = RecordingRunner::returning(0);
        let invoker = invoker(ConnectionProfile::integrated("sqlcmd", "S1")?, &runner);

        let err = invoker.run_query("", None).await.unwrap_err();
        assert!(matches!(
            err,
            SqlexecError::Domain(DomainError::MissingArgument("query"))
        ));

        let err = invoker.run_file("", None).await.unwrap_err();
        assert!(matches!(
            err,
            SqlexecError::Domain(DomainError::MissingArgument("file"))
        ));

        let err = invoker.run_query("SELECT 1", Some("")).await.unwrap_err();
        assert!(err.is_validation());

        assert!(runner.command_lines().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_custom_argument_builder_is_used() -> anyhow::Result<()> {
        struct Fixed;
        impl ArgumentBuilder for Fixed {
            fn build(
                &self,
                profile: &ConnectionProfile,
                _database: Option<&str>,
                _action: &Action<'_>,
            ) -> Vec<String> {
                let auth = match profile.authentication() {
                    Authentication::Integrated => "trusted",
                    Authentication::SqlLogin { .. } => "login",
                };
                vec!["--fixed".into(), auth.into()]
            }
        }

        let runner = RecordingRunner::returning(0);
        let invoker = invoker(ConnectionProfile::integrated("sqlcmd", "S1")?, &runner)
            .with_argument_builder(Arc::new(Fixed));

        invoker.run_query("SELECT 1", None).await?;
        assert_eq!(runner.command_lines(), vec!["sqlcmd --fixed trusted"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() -> anyhow::Result<()> {
        let runner = RecordingRunner::returning(0);
        let invoker = invoker(ConnectionProfile::integrated("sqlcmd", "S1")?, &runner);

        let mut handles = Vec::new();
        for db in ["A", "B", "C"] {
            let invoker = invoker.clone();
            handles.push(tokio::spawn(async move {
                invoker.run_query("SELECT 1", Some(db)).await
            }));
        }
        for handle in handles {
            assert_eq!(handle.await??, 0);
        }

        let mut lines = runner.command_lines();
        lines.sort();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("-d A"));
        assert!(lines[2].contains("-d C"));
        Ok(())
    }
}
