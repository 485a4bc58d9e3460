use crate::{
    abstract_trait::{
        auth::{AuthServiceTrait, DynAdminQueryRepository, DynStudentQueryRepository},
        hashing::DynHashing,
        jwt::DynJwtService,
    },
    domain::{
        principal::Role,
        requests::auth::{AdminLoginRequest, StudentLoginRequest},
        responses::{
            AdminResponse, AdminTokenResponse, ApiResponse, StudentResponse, StudentTokenResponse,
        },
    },
    errors::ServiceError,
    service::validate,
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct AuthService {
    students: DynStudentQueryRepository,
    admins: DynAdminQueryRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(
        students: DynStudentQueryRepository,
        admins: DynAdminQueryRepository,
        hashing: DynHashing,
        jwt: DynJwtService,
    ) -> Self {
        Self {
            students,
            admins,
            hashing,
            jwt,
        }
    }

    async fn check_password(&self, hashed: &str, password: &str) -> Result<(), ServiceError> {
        if self.hashing.compare_password(hashed, password).await? {
            Ok(())
        } else {
            Err(ServiceError::InvalidCredentials)
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login_student(
        &self,
        req: &StudentLoginRequest,
    ) -> Result<ApiResponse<StudentTokenResponse>, ServiceError> {
        validate(req)?;

        let student_id = req.student_id.trim();
        info!("🔐 Student login attempt: {student_id}");

        let Some(student) = self.students.find_by_id(student_id).await? else {
            warn!("⚠️ Unknown student id {student_id}");
            return Err(ServiceError::InvalidCredentials);
        };

        self.check_password(&student.password, &req.password)
            .await
            .inspect_err(|_| warn!("⚠️ Wrong password for student {student_id}"))?;

        let token = self
            .jwt
            .generate_token(&student.student_id, Role::Student, &student.name)?;

        info!("✅ Student {student_id} logged in");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            data: StudentTokenResponse {
                token,
                student: StudentResponse::from(student),
            },
        })
    }

    async fn login_admin(
        &self,
        req: &AdminLoginRequest,
    ) -> Result<ApiResponse<AdminTokenResponse>, ServiceError> {
        validate(req)?;

        let user_id = req.user_id.trim();
        info!("🔐 Admin login attempt: {user_id}");

        let Some(admin) = self.admins.find_by_user_id(user_id).await? else {
            warn!("⚠️ Unknown admin user {user_id}");
            return Err(ServiceError::InvalidCredentials);
        };

        self.check_password(&admin.password, &req.password)
            .await
            .inspect_err(|_| warn!("⚠️ Wrong password for admin {user_id}"))?;

        let token = self
            .jwt
            .generate_token(&admin.admin_id.to_string(), Role::Admin, &admin.name)?;

        info!("✅ Admin {user_id} logged in");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            data: AdminTokenResponse {
                token,
                admin: AdminResponse::from(admin),
            },
        })
    }

    async fn get_student_me(
        &self,
        student_id: &str,
    ) -> Result<ApiResponse<StudentResponse>, ServiceError> {
        let student = self
            .students
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Student not found".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Student retrieved successfully".to_string(),
            data: StudentResponse::from(student),
        })
    }

    async fn get_admin_me(&self, admin_id: i32) -> Result<ApiResponse<AdminResponse>, ServiceError> {
        let admin = self
            .admins
            .find_by_id(admin_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Admin not found".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Admin retrieved successfully".to_string(),
            data: AdminResponse::from(admin),
        })
    }
}
