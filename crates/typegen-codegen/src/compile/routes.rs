//! Route compiler.

use crate::ast::{Param, RouteBuilder, TemplatePart, TsPrimitive, TsType};
use crate::docs::DocRenderer;
use crate::mapper;
use crate::naming::to_camel_case;
use regex::Regex;
use std::sync::LazyLock;
use typegen_core::{ItemInfo, RouteInfo};

/// Placeholder with the separator in front of it.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/?&]?<[^>]*>").expect("valid regex"));

/// Name of the leading parameter of every route function.
pub const BASE_URL_PARAM: &str = "baseUrl";

/// Removes every `<param>` placeholder, with one preceding `/`, `?` or `&`,
/// from a path template.
///
/// # Examples
///
/// ```
/// use typegen_codegen::compile::strip_placeholders;
///
/// assert_eq!(strip_placeholders("/users/<id>/"), "/users/");
/// assert_eq!(strip_placeholders("/verify?<code>"), "/verify");
/// assert_eq!(strip_placeholders("/<bucket>/<id>"), "");
/// ```
#[must_use]
pub fn strip_placeholders(route: &str) -> String {
    PLACEHOLDER.replace_all(route, "").into_owned()
}

/// Compiles a route item into a URL-building function.
///
/// Parameters are `baseUrl`, then path parameters, then query parameters,
/// all camelCased. The returned URL is the stripped path template without
/// trailing slashes, one `/${param}` per path parameter, a closing `/`, and
/// `?` followed by the `&`-joined query parameters if there are any.
#[must_use]
pub fn compile_route(info: &ItemInfo, route: &RouteInfo, docs: &DocRenderer) -> RouteBuilder {
    let path_params: Vec<Param> = route
        .path_params
        .iter()
        .map(|param| Param {
            name: to_camel_case(&param.name),
            ty: mapper::map(&param.param_type),
        })
        .collect();
    let query_params: Vec<Param> = route
        .query_params
        .iter()
        .map(|param| Param {
            name: to_camel_case(&param.name),
            ty: mapper::map(&param.param_type),
        })
        .collect();

    let stripped = strip_placeholders(&route.route);
    let mut template = vec![
        TemplatePart::Param(BASE_URL_PARAM.to_string()),
        TemplatePart::Static(stripped.trim_end_matches('/').to_string()),
    ];
    for param in &path_params {
        template.push(TemplatePart::Static("/".to_string()));
        template.push(TemplatePart::Param(param.name.clone()));
    }
    template.push(TemplatePart::Static("/".to_string()));
    for (i, param) in query_params.iter().enumerate() {
        let separator = if i == 0 { "?" } else { "&" };
        template.push(TemplatePart::Static(separator.to_string()));
        template.push(TemplatePart::Param(param.name.clone()));
    }

    let mut params = Vec::with_capacity(1 + path_params.len() + query_params.len());
    params.push(Param {
        name: BASE_URL_PARAM.to_string(),
        ty: TsType::Primitive(TsPrimitive::String),
    });
    params.extend(path_params);
    params.extend(query_params);

    RouteBuilder {
        name: to_camel_case(&info.name),
        doc: docs.render(&info.doc),
        params,
        template,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::Emit;
    use typegen_core::{Item, PathParamInfo, QueryParamInfo};

    fn route(name: &str, path: &str, path_params: &[(&str, &str)], query: &[(&str, &str)]) -> (ItemInfo, RouteInfo) {
        let info = RouteInfo {
            method: "GET".to_string(),
            route: path.to_string(),
            path_params: path_params
                .iter()
                .map(|(name, ty)| PathParamInfo {
                    name: (*name).to_string(),
                    param_type: (*ty).to_string(),
                })
                .collect(),
            query_params: query
                .iter()
                .map(|(name, ty)| QueryParamInfo {
                    name: (*name).to_string(),
                    param_type: (*ty).to_string(),
                })
                .collect(),
            body_type: None,
            return_type: None,
            guards: Vec::new(),
        };
        let item = ItemInfo {
            name: name.to_string(),
            doc: String::new(),
            category: String::new(),
            hidden: false,
            package: String::new(),
            item: Item::Route(info.clone()),
        };
        (item, info)
    }

    fn compile(name: &str, path: &str, path_params: &[(&str, &str)], query: &[(&str, &str)]) -> String {
        let (item, info) = route(name, path, path_params, query);
        compile_route(&item, &info, &DocRenderer::default()).emit()
    }

    #[test]
    fn test_path_param() {
        assert_eq!(
            compile("get_user", "/users/<id>/", &[("id", "u64")], &[]),
            "function getUser(baseUrl: string, id: number): string {\n  return `${baseUrl}/users/${id}/`;\n}\n"
        );
    }

    #[test]
    fn test_snake_case_params_are_camel_cased() {
        assert_eq!(
            compile("delete_session", "/sessions/<session_id>", &[("session_id", "u64")], &[]),
            "function deleteSession(baseUrl: string, sessionId: number): string {\n  return `${baseUrl}/sessions/${sessionId}/`;\n}\n"
        );
    }

    #[test]
    fn test_query_params() {
        assert_eq!(
            compile("verify_user", "/users/verify?<code>", &[], &[("code", "u32")]),
            "function verifyUser(baseUrl: string, code: number): string {\n  return `${baseUrl}/users/verify/?${code}`;\n}\n"
        );
        assert_eq!(
            compile("search", "/search?<query>&<page_size>", &[], &[("query", "String"), ("page_size", "Option<u32>")]),
            "function search(baseUrl: string, query: string, pageSize: number | null): string {\n  return `${baseUrl}/search/?${query}&${pageSize}`;\n}\n"
        );
    }

    #[test]
    fn test_root_route() {
        assert_eq!(
            compile("get_instance_info", "/?<rate_limits>", &[], &[("rate_limits", "bool")]),
            "function getInstanceInfo(baseUrl: string, rateLimits: boolean): string {\n  return `${baseUrl}/?${rateLimits}`;\n}\n"
        );
        assert_eq!(
            compile("upload_attachment", "/", &[], &[]),
            "function uploadAttachment(baseUrl: string): string {\n  return `${baseUrl}/`;\n}\n"
        );
    }

    #[test]
    fn test_params_follow_declared_order() {
        let (item, info) = route(
            "get_file",
            "/<bucket>/<id>",
            &[("bucket", "String"), ("id", "u64")],
            &[],
        );
        let builder = compile_route(&item, &info, &DocRenderer::default());
        let names: Vec<_> = builder.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["baseUrl", "bucket", "id"]);
        assert_eq!(
            builder.emit(),
            "function getFile(baseUrl: string, bucket: string, id: number): string {\n  return `${baseUrl}/${bucket}/${id}/`;\n}\n"
        );
    }
}
