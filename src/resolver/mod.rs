use crate::config::Config;
use crate::model::{ControllerFile, LineResolution, NavigationTarget, RouteRecord};
use crate::util;
use anyhow::Result;
use std::path::Path;

pub mod controller;
pub mod extract;
pub mod method;
pub mod scan;

use controller::ControllerIndex;
use extract::RouteMatch;
use method::LocateMode;

/// Batch resolution: every route declaration under `routes_root`, resolved
/// against the controllers under `controllers_root`. Record order is sorted
/// file order, then in-file match order. Each call re-reads and re-resolves
/// from scratch; nothing is cached between calls.
///
/// A missing root aborts with an error. An unreadable route or controller
/// file degrades only its own contribution, with a warning on stderr.
pub fn resolve_all(routes_root: &Path, controllers_root: &Path) -> Result<Vec<RouteRecord>> {
    let ext = &Config::get().source_ext;
    let route_files = scan::locate_files(routes_root, ext)?;
    let index = ControllerIndex::build(controllers_root, ext)?;

    let mut records = Vec::new();
    for route_file in &route_files {
        let content = match util::read_to_string(route_file) {
            Ok(value) => value,
            Err(err) => {
                eprintln!(
                    "routelens: skipping route file {}: {err:#}",
                    route_file.display()
                );
                continue;
            }
        };
        for route in extract::extract_routes(&content) {
            records.push(resolve_route(route, route_file, &index));
        }
    }
    Ok(records)
}

fn resolve_route(route: RouteMatch, route_file: &Path, index: &ControllerIndex) -> RouteRecord {
    let controller_file = index.resolve(&route.controller_name);
    let controller_method_line = controller_file.path().and_then(|path| {
        match util::read_to_string(path) {
            Ok(content) => method::definition_line(&content, &route.method_name),
            Err(err) => {
                eprintln!(
                    "routelens: cannot read controller {}: {err:#}",
                    path.display()
                );
                None
            }
        }
    });
    RouteRecord {
        route_name: route.route_name,
        controller_name: route.controller_name,
        method_name: route.method_name,
        route_file_path: route_file.to_path_buf(),
        controller_file_path: controller_file,
        controller_method_line,
    }
}

/// Interactive resolution for the single line under the cursor, using the
/// definition locate mode.
pub fn resolve_at_line(line_text: &str, controllers_root: &Path) -> Result<LineResolution> {
    resolve_at_line_with_mode(line_text, controllers_root, LocateMode::Definition)
}

/// Interactive resolution with an explicit locate mode. The pattern check
/// runs first: a line with no declaration returns `NoMatch` before any
/// filesystem access. Non-route text is a legitimate input here and takes
/// the same path.
pub fn resolve_at_line_with_mode(
    line_text: &str,
    controllers_root: &Path,
    mode: LocateMode,
) -> Result<LineResolution> {
    let Some(route) = extract::match_route_line(line_text) else {
        return Ok(LineResolution::NoMatch);
    };

    let ext = &Config::get().source_ext;
    let index = ControllerIndex::build(controllers_root, ext)?;
    let ControllerFile::Found(path) = index.resolve(&route.controller_name) else {
        return Ok(LineResolution::ControllerNotFound {
            controller_name: route.controller_name,
        });
    };

    let content = util::read_to_string(&path)?;
    match method::locate(mode, &content, &route.method_name) {
        Some(line) => Ok(LineResolution::Target(NavigationTarget {
            file_path: path,
            line,
        })),
        None => Ok(LineResolution::MethodNotFound {
            controller_name: route.controller_name,
            method_name: route.method_name,
            controller_file_path: path,
        }),
    }
}
