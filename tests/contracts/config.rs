//! Configuration contracts
//!
//! Priority: CLI flags > env vars > project config > user config > defaults

use crate::common::*;

const ONE_EMPLOYEE: &str = r#"[{"employeeId": "solo", "firstName": "Solo"}]"#;

mod config_priority {
    use super::*;

    #[test]
    fn contract_default_store_is_roster_json_in_cwd() {
        let env = TestEnv::seeded(ONE_EMPLOYEE);
        assert!(env.store_path().exists());
    }

    #[test]
    fn contract_user_config_sets_store_path() {
        let env = TestEnv::new();
        env.write_home_file(
            ".config/roster/config.toml",
            "[store]\npath = \"user.json\"\n",
        );

        assert_success!(env.seed(ONE_EMPLOYEE));
        assert!(env.project_path("user.json").exists());
        assert!(!env.store_path().exists());
    }

    #[test]
    fn contract_project_config_overrides_user_config() {
        let env = TestEnv::new();
        env.write_home_file(
            ".config/roster/config.toml",
            "[store]\npath = \"user.json\"\n",
        );
        env.write_project_file(
            ".roster/config.toml",
            "[store]\npath = \"project.json\"\n",
        );

        assert_success!(env.seed(ONE_EMPLOYEE));
        assert!(env.project_path("project.json").exists());
        assert!(!env.project_path("user.json").exists());
    }

    #[test]
    fn contract_env_overrides_project_config() {
        let env = TestEnv::new();
        env.write_project_file(
            ".roster/config.toml",
            "[store]\npath = \"project.json\"\n",
        );
        env.write_project_file("seed.json", ONE_EMPLOYEE);

        let result = env.run_with_env(
            &["seed", "seed.json"],
            &[("ROSTER_STORE_PATH", "from-env.json")],
        );
        assert_success!(result);
        assert!(env.project_path("from-env.json").exists());
        assert!(!env.project_path("project.json").exists());
    }

    #[test]
    fn contract_cli_flag_overrides_env() {
        let env = TestEnv::new();
        env.write_project_file("seed.json", ONE_EMPLOYEE);

        let result = env.run_with_env(
            &["seed", "seed.json", "--store", "from-flag.json"],
            &[("ROSTER_STORE_PATH", "from-env.json")],
        );
        assert_success!(result);
        assert!(env.project_path("from-flag.json").exists());
        assert!(!env.project_path("from-env.json").exists());
    }

    #[test]
    fn contract_output_format_from_config_and_env() {
        let env = TestEnv::seeded(ONE_EMPLOYEE);

        let text = env.run(&["employee", "show", "solo"]);
        assert_success!(text);
        assert!(text.stdout.starts_with("solo  Solo"));

        env.write_project_file(".roster/config.toml", "[output]\nformat = \"json\"\n");
        let json = env.run(&["employee", "show", "solo"]);
        assert_success!(json);
        assert_eq!(json.json()["firstName"], "Solo");

        let text_again =
            env.run_with_env(&["employee", "show", "solo"], &[("ROSTER_OUTPUT", "text")]);
        assert_success!(text_again);
        assert!(text_again.stdout.starts_with("solo  Solo"));
    }
}

mod config_validation {
    use super::*;

    #[test]
    fn contract_unknown_key_warns_but_runs() {
        let env = TestEnv::seeded(ONE_EMPLOYEE);
        env.write_project_file(".roster/config.toml", "[store]\npth = \"typo.json\"\n");

        let result = env.run(&["employee", "show", "solo"]);
        assert_success!(result);
        assert!(result.stderr.contains("unknown config key"));
        assert!(result.stderr.contains("pth"));
    }

    #[test]
    fn contract_invalid_config_fails_loudly() {
        let env = TestEnv::new();
        env.write_project_file(".roster/config.toml", "[store\npath = ");

        let result = env.run(&["reports", "ada"]);
        assert_failure!(result);
        assert_output_contains!(result, "failed to load configuration");
    }
}
