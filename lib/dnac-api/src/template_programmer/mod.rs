//! Configuration templates: `/api/v1/template-programmer`.
//!
//! Listing and reading endpoints answer with the bare payload, mutations
//! with an enveloped task.

use dnac_core::{CallPath, CallQuery, DnacClient};
use serde::Serialize;

use crate::common::{EndpointCall, TaskIdResult};

mod models;

pub use self::models::*;

/// Filters of [`get_templates`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFilter {
    pub project_id: Option<String>,
    pub software_type: Option<String>,
    pub software_version: Option<String>,
    pub product_family: Option<String>,
    pub product_series: Option<String>,
    pub product_type: Option<String>,
    pub filter_conflicting_templates: Option<bool>,
}

/// Projects, optionally restricted to one name.
pub fn get_projects(
    client: &DnacClient,
    name: Option<&str>,
) -> EndpointCall<Vec<ProjectSummary>> {
    let query = CallQuery::new().add_param("name", name);
    Ok(client
        .get("/api/v1/template-programmer/project")?
        .with_query(query)
        .into_json())
}

/// Creates a project.
pub fn create_project(client: &DnacClient, project: &Project) -> EndpointCall<TaskIdResult> {
    Ok(client
        .post("/api/v1/template-programmer/project")?
        .json(project)?
        .into_json())
}

/// Updates a project.
pub fn update_project(client: &DnacClient, project: &Project) -> EndpointCall<TaskIdResult> {
    Ok(client
        .put("/api/v1/template-programmer/project")?
        .json(project)?
        .into_json())
}

/// Deletes a project and its templates.
pub fn delete_project(client: &DnacClient, project_id: &str) -> EndpointCall<TaskIdResult> {
    let path = CallPath::from("/api/v1/template-programmer/project/{projectId}")
        .add_param("projectId", project_id);
    Ok(client.delete(path)?.into_json())
}

/// Creates a template inside a project.
pub fn create_template(
    client: &DnacClient,
    project_id: &str,
    template: &Template,
) -> EndpointCall<TaskIdResult> {
    let path = CallPath::from("/api/v1/template-programmer/project/{projectId}/template")
        .add_param("projectId", project_id);
    Ok(client.post(path)?.json(template)?.into_json())
}

/// Templates matching `filter`.
pub fn get_templates(
    client: &DnacClient,
    filter: &TemplateFilter,
) -> EndpointCall<Vec<TemplateSummary>> {
    Ok(client
        .get("/api/v1/template-programmer/template")?
        .with_query_params(filter)?
        .into_json())
}

/// Updates the content and metadata of a template.
pub fn update_template(client: &DnacClient, template: &Template) -> EndpointCall<TaskIdResult> {
    Ok(client
        .put("/api/v1/template-programmer/template")?
        .json(template)?
        .into_json())
}

/// One template; with `latest_version` the last committed version is returned.
pub fn get_template_by_id(
    client: &DnacClient,
    template_id: &str,
    latest_version: Option<bool>,
) -> EndpointCall<Template> {
    let path = CallPath::from("/api/v1/template-programmer/template/{templateId}")
        .add_param("templateId", template_id);
    let query = CallQuery::new().add_param("latestVersion", latest_version);
    Ok(client.get(path)?.with_query(query).into_json())
}

/// Deletes a template.
pub fn delete_template(client: &DnacClient, template_id: &str) -> EndpointCall<TaskIdResult> {
    let path = CallPath::from("/api/v1/template-programmer/template/{templateId}")
        .add_param("templateId", template_id);
    Ok(client.delete(path)?.into_json())
}

/// Deploys a template to the target devices.
pub fn deploy_template(
    client: &DnacClient,
    deployment: &TemplateDeploymentInfo,
) -> EndpointCall<TemplateDeploymentStatus> {
    Ok(client
        .post("/api/v1/template-programmer/template/deploy")?
        .json(deployment)?
        .into_json())
}

/// Progress of a deployment started by [`deploy_template`].
pub fn get_template_deployment_status(
    client: &DnacClient,
    deployment_id: &str,
) -> EndpointCall<TemplateDeploymentStatus> {
    let path =
        CallPath::from("/api/v1/template-programmer/template/deploy/status/{deploymentId}")
            .add_param("deploymentId", deployment_id);
    Ok(client.get(path)?.into_json())
}

/// Renders a template without deploying it.
pub fn preview_template(
    client: &DnacClient,
    request: &TemplatePreviewRequest,
) -> EndpointCall<TemplatePreviewResponse> {
    Ok(client
        .put("/api/v1/template-programmer/template/preview")?
        .json(request)?
        .into_json())
}

/// Commits the current content of a template as a new version.
pub fn version_template(
    client: &DnacClient,
    request: &TemplateVersionRequest,
) -> EndpointCall<TaskIdResult> {
    Ok(client
        .post("/api/v1/template-programmer/template/version")?
        .json(request)?
        .into_json())
}

/// Committed versions of a template.
pub fn get_template_versions(
    client: &DnacClient,
    template_id: &str,
) -> EndpointCall<Vec<TemplateSummary>> {
    let path = CallPath::from("/api/v1/template-programmer/template/version/{templateId}")
        .add_param("templateId", template_id);
    Ok(client.get(path)?.into_json())
}
