use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use edusphere_core::{ErrorResponse, UserRole};
use edusphere_models::{
    Assignment, CreateAssignmentDto, LoginRequest, LoginResponse, LoginUser, Principal,
    PublicUser, RegisterRequest, RoleProfile, UpdateRoleDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_me,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user_role,
        crate::modules::users::controller::delete_user,
        crate::modules::assignments::controller::create_assignment,
        crate::modules::assignments::controller::get_assignments,
        crate::modules::assignments::controller::delete_assignment,
    ),
    components(
        schemas(
            UserRole,
            LoginRequest,
            LoginResponse,
            LoginUser,
            RegisterRequest,
            RoleProfile,
            PublicUser,
            Principal,
            UpdateRoleDto,
            Assignment,
            CreateAssignmentDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login, registration, and the current principal"),
        (name = "Users", description = "User administration"),
        (name = "Assignments", description = "Teacher assignments")
    ),
    info(
        title = "EduSphere API",
        version = "0.1.0",
        description = "School management backend with role-based JWT authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
