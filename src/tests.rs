#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use crate::config::Config;
    use clap::Parser;

    #[test]
    fn test_cli_default_services_in_order() {
        let args = vec!["kubectl-summarize"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(
            cli.services,
            vec![
                "order-service".to_string(),
                "payment-service".to_string(),
                "auth-service".to_string(),
            ]
        );
    }

    #[test]
    fn test_cli_explicit_services_replace_defaults() {
        let args = vec!["kubectl-summarize", "cart-service", "search-service"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(
            cli.services,
            vec!["cart-service".to_string(), "search-service".to_string()]
        );
    }

    #[test]
    fn test_cli_default_namespace_and_endpoint() {
        let args = vec!["kubectl-summarize"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.namespace, "auth-ns");
        assert_eq!(cli.api_url, "http://127.0.0.1:8000/summarize");
        assert_eq!(cli.tail, 50);
        assert_eq!(cli.since, "5m");
        assert_eq!(cli.timeout, 30);
        assert_eq!(cli.kubectl, "kubectl");
        assert!(cli.container.is_none());
    }

    #[test]
    fn test_cli_parsing_namespace() {
        let args = vec!["kubectl-summarize", "-n", "prod"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.namespace, "prod");
    }

    #[test]
    fn test_cli_parsing_container() {
        let args = vec!["kubectl-summarize", "auth-service", "-c", "app"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.container, Some("app".to_string()));
    }

    #[test]
    fn test_cli_parsing_tail_and_since() {
        let args = vec!["kubectl-summarize", "--tail", "200", "--since", "1h"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.tail, 200);
        assert_eq!(cli.since, "1h");
    }

    #[test]
    fn test_cli_parsing_verbose() {
        let args = vec!["kubectl-summarize", "-v"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_config_from_cli_carries_timeout_as_duration() {
        let args = vec!["kubectl-summarize", "--timeout", "10"];
        let cli = Cli::try_parse_from(args).unwrap();
        let config = Config::from_cli(&cli);
        assert_eq!(config.request_timeout.as_secs(), 10);
        assert_eq!(config.services.len(), 3);
    }
}
