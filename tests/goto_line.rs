use routelens::model::LineResolution;
use routelens::resolver::method::LocateMode;
use routelens::resolver::{resolve_at_line, resolve_at_line_with_mode};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const USER_CONTROLLER: &str = r#"<?php

namespace App\Http\Controllers;

use Illuminate\Http\Request;

class UserController extends Controller
{
    /**
     * Show every registered user.
     */
    public function index()
    {
        return view('users.index');
    }
}
"#;

const PAYMENT_CONTROLLER: &str = r#"<?php

namespace App\Http\Controllers;

abstract class PaymentGatewayController extends Controller
{
    abstract public function authorize(Request $request);

    public function receipt()
    {
        return response()->noContent();
    }
}
"#;

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
}

fn controllers_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "UserController.php", USER_CONTROLLER);
    write_file(dir.path(), "PaymentGatewayController.php", PAYMENT_CONTROLLER);
    dir
}

#[test]
fn declaration_line_resolves_to_a_navigation_target() {
    let dir = controllers_root();
    let line = "Route::get('/users', 'UserController@index')->name('users.index');";

    let resolution = resolve_at_line(line, dir.path()).unwrap();
    let LineResolution::Target(target) = resolution else {
        panic!("expected a navigation target, got {resolution:?}");
    };
    assert_eq!(target.file_path, dir.path().join("UserController.php"));
    assert_eq!(target.line, 12);
    assert_eq!(target.editor_line(), 11);
}

#[test]
fn non_declaration_line_is_no_match() {
    let dir = controllers_root();

    let comment = resolve_at_line("// users are listed elsewhere", dir.path()).unwrap();
    assert_eq!(comment, LineResolution::NoMatch);

    let blank = resolve_at_line("", dir.path()).unwrap();
    assert_eq!(blank, LineResolution::NoMatch);
}

#[test]
fn no_match_short_circuits_before_any_filesystem_work() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("never-created");

    // A missing controllers root would error, so an Ok(NoMatch) proves the
    // line check ran first.
    let resolution = resolve_at_line("$count = 3;", &missing).unwrap();
    assert_eq!(resolution, LineResolution::NoMatch);
}

#[test]
fn unknown_controller_reports_the_miss() {
    let dir = controllers_root();
    let line = "Route::get('/ghosts', 'GhostController@index');";

    let resolution = resolve_at_line(line, dir.path()).unwrap();
    assert_eq!(
        resolution,
        LineResolution::ControllerNotFound {
            controller_name: "GhostController".to_string(),
        }
    );
}

#[test]
fn unknown_method_reports_the_miss() {
    let dir = controllers_root();
    let line = "Route::delete('/users/{id}', 'UserController@destroy');";

    let resolution = resolve_at_line(line, dir.path()).unwrap();
    assert_eq!(
        resolution,
        LineResolution::MethodNotFound {
            controller_name: "UserController".to_string(),
            method_name: "destroy".to_string(),
            controller_file_path: dir.path().join("UserController.php"),
        }
    );
}

#[test]
fn declaration_mode_reaches_braceless_methods() {
    let dir = controllers_root();
    let line = "Route::post('/payments', 'PaymentGatewayController@authorize');";

    let strict = resolve_at_line_with_mode(line, dir.path(), LocateMode::Definition).unwrap();
    assert!(matches!(strict, LineResolution::MethodNotFound { .. }));

    let loose = resolve_at_line_with_mode(line, dir.path(), LocateMode::Declaration).unwrap();
    let LineResolution::Target(target) = loose else {
        panic!("expected a navigation target, got {loose:?}");
    };
    assert_eq!(target.file_path, dir.path().join("PaymentGatewayController.php"));
    assert_eq!(target.line, 7);
}

#[test]
fn modes_agree_on_ordinary_definitions() {
    let dir = controllers_root();
    let line = "Route::get('/receipt', 'PaymentGatewayController@receipt');";

    let strict = resolve_at_line_with_mode(line, dir.path(), LocateMode::Definition).unwrap();
    let loose = resolve_at_line_with_mode(line, dir.path(), LocateMode::Declaration).unwrap();
    assert_eq!(strict, loose);
}
