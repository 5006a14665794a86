//! Turning a request into rendered artifacts and target paths

use enumgen_core::{
    parse_case_line, ArtifactKind, CaseLine, CaseSet, Config, EnumCase, EnumName, EnumSpec,
    GeneratedArtifact, Namespace, TypeSpec,
};
use enumgen_render::TemplateRenderer;
use serde::Serialize;

use crate::error::ScaffoldError;

/// File extension of generated sources
const SOURCE_EXTENSION: &str = "php";

/// Collected input for one generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldRequest {
    pub enum_name: EnumName,
    pub cases: Vec<EnumCase>,
    pub enum_namespace: Namespace,
    pub type_namespace: Namespace,

    /// Explicit type name; derived from the enum name when absent
    pub type_name: Option<String>,
}

impl ScaffoldRequest {
    /// Build a request from raw, non-interactive input.
    ///
    /// Case lines use the interactive `NAME=value` syntax; blank lines are
    /// ignored. Missing namespaces fall back to the config defaults.
    pub fn parse(
        enum_name: &str,
        case_lines: &[String],
        enum_namespace: Option<&str>,
        type_namespace: Option<&str>,
        type_name: Option<&str>,
        config: &Config,
    ) -> Result<Self, ScaffoldError> {
        let enum_name = EnumName::parse(enum_name)?;

        let mut cases = CaseSet::new();
        for line in case_lines {
            if let CaseLine::Case(case) = parse_case_line(line)? {
                cases.push(case)?;
            }
        }

        let enum_namespace = match enum_namespace {
            Some(raw) => Namespace::parse(raw)?,
            None => config.default_enum_namespace()?,
        };
        let type_namespace = match type_namespace {
            Some(raw) => Namespace::parse(raw)?,
            None => config.default_type_namespace()?,
        };

        Ok(Self {
            enum_name,
            cases: cases.finish()?,
            enum_namespace,
            type_namespace,
            type_name: type_name.map(str::to_string),
        })
    }
}

/// Validated specs plus the rendered files, ready to be written
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub enum_spec: EnumSpec,
    pub type_spec: TypeSpec,
    pub artifacts: Vec<GeneratedArtifact>,
}

impl ScaffoldPlan {
    /// Validate the request, compute target paths and render both files.
    ///
    /// Nothing touches the filesystem here.
    pub fn build(
        request: &ScaffoldRequest,
        config: &Config,
        renderer: &TemplateRenderer,
    ) -> Result<Self, ScaffoldError> {
        let enum_spec = EnumSpec::new(
            request.enum_name.clone(),
            request.enum_namespace.clone(),
            request.cases.iter().cloned(),
        )?;

        let mut type_spec = TypeSpec::for_enum(&enum_spec, request.type_namespace.clone(), config.base_class()?);
        if let Some(type_name) = &request.type_name {
            type_spec = type_spec.with_type_name(type_name)?;
        }

        let enum_path = config
            .namespace_to_path(enum_spec.namespace())
            .join(format!("{}.{}", enum_spec.name(), SOURCE_EXTENSION));
        let type_path = config
            .namespace_to_path(&type_spec.type_namespace)
            .join(format!("{}.{}", type_spec.class_name, SOURCE_EXTENSION));

        let artifacts = vec![
            GeneratedArtifact::new(ArtifactKind::Enum, enum_path, renderer.render_enum(&enum_spec)?),
            GeneratedArtifact::new(ArtifactKind::Type, type_path, renderer.render_type(&type_spec)?),
        ];

        Ok(Self {
            enum_spec,
            type_spec,
            artifacts,
        })
    }

    pub fn artifact(&self, kind: ArtifactKind) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    /// Case names in declaration order
    pub fn case_names(&self) -> Vec<String> {
        self.enum_spec.cases().iter().map(|c| c.name.clone()).collect()
    }

    /// Lines shown before asking for confirmation
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Enum: {}", self.enum_spec.qualified_name()),
            format!("Type: {}", self.type_spec.qualified_class_name()),
            format!("Type name: {}", self.type_spec.type_name),
            format!("Cases: {}", self.case_names().join(", ")),
        ];

        for artifact in &self.artifacts {
            lines.push(format!("File: {}", artifact.path.display()));
        }
        lines
    }

    /// Usage instructions shown after the files are written
    pub fn next_steps(&self) -> Vec<String> {
        let enum_name = self.enum_spec.name();
        let class_name = &self.type_spec.class_name;

        vec![
            "Use your new enum in an entity:".to_string(),
            String::new(),
            format!("use {};", self.enum_spec.qualified_name()),
            format!("use {};", self.type_spec.qualified_class_name()),
            "use Doctrine\\ORM\\Mapping as ORM;".to_string(),
            String::new(),
            "#[ORM\\Entity]".to_string(),
            "class YourEntity".to_string(),
            "{".to_string(),
            format!("    #[ORM\\Column(type: {}::NAME)]", class_name),
            format!("    // or: #[ORM\\Column(type: '{}')]", self.type_spec.type_name),
            format!("    private ?{} $status = null;", enum_name),
            "}".to_string(),
            String::new(),
            "Then run:".to_string(),
            "  php bin/console doctrine:migrations:diff".to_string(),
            "  php bin/console doctrine:migrations:migrate".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumgen_core::ValidationError;
    use std::path::PathBuf;

    fn request(cases: Vec<EnumCase>) -> ScaffoldRequest {
        ScaffoldRequest {
            enum_name: EnumName::parse("OrderState").unwrap(),
            cases,
            enum_namespace: Namespace::parse("App\\Enum").unwrap(),
            type_namespace: Namespace::parse("App\\Type").unwrap(),
            type_name: None,
        }
    }

    #[test]
    fn test_paths_follow_namespaces() {
        let config = Config::default().with_project_root("/project");
        let plan = ScaffoldPlan::build(
            &request(vec![EnumCase::new("NEW", "new").unwrap()]),
            &config,
            &TemplateRenderer::with_defaults(),
        )
        .unwrap();

        assert_eq!(
            plan.artifact(ArtifactKind::Enum).unwrap().path,
            PathBuf::from("/project/src/Enum/OrderState.php")
        );
        assert_eq!(
            plan.artifact(ArtifactKind::Type).unwrap().path,
            PathBuf::from("/project/src/Type/OrderStateEnumType.php")
        );
    }

    #[test]
    fn test_summary_and_next_steps() {
        let plan = ScaffoldPlan::build(
            &request(vec![
                EnumCase::new("NEW", "new").unwrap(),
                EnumCase::new("PAID", "paid").unwrap(),
            ]),
            &Config::default(),
            &TemplateRenderer::with_defaults(),
        )
        .unwrap();

        let summary = plan.summary();
        assert!(summary.contains(&"Enum: App\\Enum\\OrderState".to_string()));
        assert!(summary.contains(&"Type: App\\Type\\OrderStateEnumType".to_string()));
        assert!(summary.contains(&"Cases: NEW, PAID".to_string()));

        let steps = plan.next_steps();
        assert!(steps.contains(&"    #[ORM\\Column(type: OrderStateEnumType::NAME)]".to_string()));
        assert!(steps.contains(&"    // or: #[ORM\\Column(type: 'order_state')]".to_string()));
    }

    #[test]
    fn test_empty_cases_rejected() {
        let err = ScaffoldPlan::build(&request(Vec::new()), &Config::default(), &TemplateRenderer::with_defaults())
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Validation(ValidationError::NoCases)));
    }

    #[test]
    fn test_parse_request() {
        let config = Config::default();
        let lines = vec!["NEW=new".to_string(), "".to_string(), "SHIPPED".to_string()];

        let req = ScaffoldRequest::parse("OrderState", &lines, None, Some("App\\Doctrine"), None, &config).unwrap();
        assert_eq!(req.cases.len(), 2);
        assert_eq!(req.cases[1].value, "shipped");
        assert_eq!(req.enum_namespace.as_str(), "App\\Enum");
        assert_eq!(req.type_namespace.as_str(), "App\\Doctrine");

        let err = ScaffoldRequest::parse("OrderState", &[], None, None, None, &config).unwrap_err();
        assert!(matches!(err, ScaffoldError::Validation(ValidationError::NoCases)));

        let dup = vec!["NEW".to_string(), "NEW=other".to_string()];
        let err = ScaffoldRequest::parse("OrderState", &dup, None, None, None, &config).unwrap_err();
        assert!(matches!(err, ScaffoldError::Validation(ValidationError::DuplicateCase(_))));
    }

    #[test]
    fn test_type_name_override() {
        let mut req = request(vec![EnumCase::new("NEW", "new").unwrap()]);
        req.type_name = Some("order_status".to_string());

        let plan = ScaffoldPlan::build(&req, &Config::default(), &TemplateRenderer::with_defaults()).unwrap();
        assert_eq!(plan.type_spec.type_name, "order_status");
        assert!(plan
            .artifact(ArtifactKind::Type)
            .unwrap()
            .content
            .contains("public const NAME = 'order_status';"));
    }
}
