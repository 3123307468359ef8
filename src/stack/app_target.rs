crate::define_id_enum! {
    /// Hosting destination that selects the workflow recipe
    AppTarget {
        WebApp => "webapp" : "WebApp" | "web-app" | "web_app",
        AzureFunction => "function" : "AzureFunction" | "functionapp" | "function-app" | "azure-function",
        WebJob => "webjob" : "WebJob" | "web-job",
        Aks => "aks" : "AKS" | "kubernetes",
        Acr => "acr" : "ACR" | "container-registry",
        ContainerApps => "containerapps" : "ContainerApps" | "container-apps",
        Nuget => "nuget" : "NuGet" | "package",
    }
}

impl AppTarget {
    /// Targets that deploy to an Azure resource and need its name and publish profile
    pub fn requires_azure_resource(&self) -> bool {
        matches!(
            self,
            Self::WebApp | Self::AzureFunction | Self::WebJob | Self::ContainerApps | Self::Aks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_with_aliases() {
        assert_eq!(AppTarget::from_name("webapp"), Some(AppTarget::WebApp));
        assert_eq!(AppTarget::from_name("WebApp"), Some(AppTarget::WebApp));
        assert_eq!(AppTarget::from_name("web-app"), Some(AppTarget::WebApp));
        assert_eq!(
            AppTarget::from_name("functionapp"),
            Some(AppTarget::AzureFunction)
        );
        assert_eq!(AppTarget::from_name("AKS"), Some(AppTarget::Aks));
        assert_eq!(AppTarget::from_name("nuget"), Some(AppTarget::Nuget));
        assert_eq!(AppTarget::from_name(" WEBJOB "), Some(AppTarget::WebJob));
    }

    #[test]
    fn test_unrecognized_text_maps_to_unknown() {
        assert_eq!(AppTarget::from_name("heroku"), None);
        assert_eq!(AppTarget::parse("heroku"), AppTarget::Unknown);
        assert!("static-site".parse::<AppTarget>().unwrap().is_unknown());
    }

    #[test]
    fn test_serialization_roundtrip_names() {
        assert_eq!(
            serde_json::to_string(&AppTarget::AzureFunction).unwrap(),
            "\"function\""
        );
        let parsed: AppTarget = serde_json::from_str("\"containerapps\"").unwrap();
        assert_eq!(parsed, AppTarget::ContainerApps);
        let unknown: AppTarget = serde_json::from_str("\"lambda\"").unwrap();
        assert_eq!(unknown, AppTarget::Unknown);
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"unknown\"");
    }

    #[test]
    fn test_display_uses_display_name() {
        assert_eq!(AppTarget::Nuget.to_string(), "NuGet");
        assert_eq!(AppTarget::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_all_variants_excludes_unknown() {
        assert_eq!(AppTarget::all_variants().len(), 7);
        assert!(!AppTarget::all_variants().contains(&AppTarget::Unknown));
    }

    #[test]
    fn test_requires_azure_resource() {
        assert!(AppTarget::WebApp.requires_azure_resource());
        assert!(AppTarget::WebJob.requires_azure_resource());
        assert!(!AppTarget::Nuget.requires_azure_resource());
        assert!(!AppTarget::Unknown.requires_azure_resource());
    }
}
