//! 命令行入口：每个子命令对应一个页面操作

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::errors::Result;
use crate::models::auth::UserRole;
use crate::models::marks::AssessmentType;
use crate::models::sessions::Student;
use crate::pages::bulk_upload::MarksUpload;
use crate::pages::class_attendance::AttendanceForm;
use crate::pages::{self, Rendered};
use crate::runtime::lifetime::startup::AppContext;

#[derive(Parser, Debug)]
#[command(name = "rust-attendance-next")]
#[command(version)]
#[command(about = "Attendance management console for admins and teachers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in as an admin (username) or a teacher (email)
    Login {
        #[arg(long)]
        role: UserRole,
        /// Username for admins, email for teachers
        #[arg(long, short)]
        user: String,
        #[arg(long, env = "ATTENDANCE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Clear the stored credentials
    Logout,
    /// Show the current login state
    Status,
    /// Teacher self-registration
    Register {
        #[command(subcommand)]
        step: RegisterStep,
    },
    /// Reset a teacher password with an emailed code
    ForgotPassword {
        #[command(subcommand)]
        step: ResetStep,
    },
    /// Show the dashboard for the current role
    Dashboard,
    /// Manage sessions and their rosters
    Sessions {
        #[command(subcommand)]
        action: SessionCommand,
    },
    /// Create or delete classes
    Classes {
        #[command(subcommand)]
        action: ClassCommand,
    },
    /// Take attendance for a class
    Attendance(AttendanceArgs),
    /// Show the comprehensive report of a class
    Report {
        class_id: String,
        /// Also write the tables as CSV files into this directory
        #[arg(long, value_name = "DIR")]
        csv: Option<PathBuf>,
    },
    /// Upload assessment marks from a CSV file
    Marks(MarksArgs),
    /// Review teacher accounts (admin)
    Teachers {
        #[command(subcommand)]
        action: TeacherCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum RegisterStep {
    SendOtp {
        #[arg(long)]
        email: String,
    },
    VerifyOtp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        otp: String,
    },
    Complete {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "ATTENDANCE_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, env = "ATTENDANCE_CONFIRM_PASSWORD", hide_env_values = true)]
        confirm_password: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ResetStep {
    SendOtp {
        #[arg(long)]
        email: String,
    },
    VerifyOtp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        otp: String,
    },
    Reset {
        #[arg(long)]
        email: String,
        #[arg(long)]
        otp: String,
        #[arg(long, env = "ATTENDANCE_NEW_PASSWORD", hide_env_values = true)]
        new_password: String,
        #[arg(long, env = "ATTENDANCE_CONFIRM_PASSWORD", hide_env_values = true)]
        confirm_password: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    List,
    /// Show the roster of a session
    Show { name: String },
    /// Create a session with an empty roster
    Create { name: String },
    /// Delete a session and all of its classes
    Delete { name: String },
    /// Add students given as `ID,NAME`
    AddStudents {
        name: String,
        #[arg(long = "student", value_name = "ID,NAME", value_parser = parse_student)]
        students: Vec<Student>,
    },
    /// Import a header-less `id,name` roster file
    Import { name: String, file: PathBuf },
    RemoveStudent { name: String, student_id: String },
}

#[derive(Subcommand, Debug)]
pub enum ClassCommand {
    Create {
        name: String,
        /// Defaults to the first listed session
        #[arg(long)]
        session: Option<String>,
    },
    Delete { class_id: String },
}

#[derive(Args, Debug)]
pub struct AttendanceArgs {
    pub class_id: String,
    /// YYYY-MM-DD, defaults to today
    #[arg(long)]
    pub date: Option<String>,
    /// Attendance count credited to each present student
    #[arg(long)]
    pub count: Option<i64>,
    /// IDs of present students
    #[arg(long, value_delimiter = ',')]
    pub present: Vec<String>,
    /// Mark every student present
    #[arg(long)]
    pub all: bool,
    /// Show the sheet without submitting
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct MarksArgs {
    pub class_id: String,
    /// Assessment name, e.g. CT-1
    #[arg(long)]
    pub name: String,
    /// CT or lab-quiz
    #[arg(long = "type")]
    pub kind: AssessmentType,
    #[arg(long)]
    pub total: f64,
    /// CSV with studentId, studentName, mark columns
    pub file: PathBuf,
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum TeacherCommand {
    Pending,
    List,
    Approve { teacher_id: String },
    Reject { teacher_id: String },
}

/// `ID,NAME`；不完整的行交给服务层过滤
fn parse_student(value: &str) -> std::result::Result<Student, String> {
    let (id, name) = value.split_once(',').unwrap_or((value, ""));
    Ok(Student::new(id.trim(), name.trim()))
}

pub async fn run(ctx: &mut AppContext, command: Command) -> Result<Rendered> {
    match command {
        Command::Login {
            role,
            user,
            password,
        } => pages::login::login(ctx, role, &user, &password).await,
        Command::Logout => pages::login::logout(ctx).await,
        Command::Status => Ok(pages::login::status(ctx)),
        Command::Register { step } => match step {
            RegisterStep::SendOtp { email } => {
                pages::registration::send_registration_otp(ctx, &email).await
            }
            RegisterStep::VerifyOtp { email, otp } => {
                pages::registration::verify_registration_otp(ctx, &email, &otp).await
            }
            RegisterStep::Complete {
                name,
                email,
                password,
                confirm_password,
            } => {
                pages::registration::complete_registration(
                    ctx,
                    &name,
                    &email,
                    &password,
                    &confirm_password,
                )
                .await
            }
        },
        Command::ForgotPassword { step } => match step {
            ResetStep::SendOtp { email } => pages::registration::send_reset_otp(ctx, &email).await,
            ResetStep::VerifyOtp { email, otp } => {
                pages::registration::verify_reset_otp(ctx, &email, &otp).await
            }
            ResetStep::Reset {
                email,
                otp,
                new_password,
                confirm_password,
            } => {
                pages::registration::reset_password(
                    ctx,
                    &email,
                    &otp,
                    &new_password,
                    &confirm_password,
                )
                .await
            }
        },
        Command::Dashboard => pages::dashboard::show(ctx).await,
        Command::Sessions { action } => match action {
            SessionCommand::List => pages::manage_sessions::list(ctx).await,
            SessionCommand::Show { name } => pages::manage_sessions::show(ctx, &name).await,
            SessionCommand::Create { name } => pages::manage_sessions::create(ctx, &name).await,
            SessionCommand::Delete { name } => pages::manage_sessions::delete(ctx, &name).await,
            SessionCommand::AddStudents { name, students } => {
                pages::manage_sessions::add_students(ctx, &name, students).await
            }
            SessionCommand::Import { name, file } => {
                pages::manage_sessions::import_roster(ctx, &name, &file).await
            }
            SessionCommand::RemoveStudent { name, student_id } => {
                pages::manage_sessions::remove_student(ctx, &name, &student_id).await
            }
        },
        Command::Classes { action } => match action {
            ClassCommand::Create { name, session } => {
                pages::add_class::create(ctx, &name, session.as_deref()).await
            }
            ClassCommand::Delete { class_id } => pages::add_class::delete(ctx, &class_id).await,
        },
        Command::Attendance(args) => {
            let form = AttendanceForm {
                date: args.date,
                weight: args.count,
                present: args.present,
                toggle_all: args.all,
                dry_run: args.dry_run,
            };
            pages::class_attendance::take(ctx, &args.class_id, form).await
        }
        Command::Report { class_id, csv } => {
            pages::attendance_report::show(ctx, &class_id, csv.as_deref()).await
        }
        Command::Marks(args) => {
            let upload = MarksUpload {
                class_id: &args.class_id,
                name: &args.name,
                kind: args.kind,
                total_marks: args.total,
                file: &args.file,
                dry_run: args.dry_run,
            };
            pages::bulk_upload::upload(ctx, upload).await
        }
        Command::Teachers { action } => match action {
            TeacherCommand::Pending => pages::dashboard::list_pending(ctx).await,
            TeacherCommand::List => pages::dashboard::list_teachers(ctx).await,
            TeacherCommand::Approve { teacher_id } => {
                pages::dashboard::approve(ctx, &teacher_id).await
            }
            TeacherCommand::Reject { teacher_id } => {
                pages::dashboard::reject(ctx, &teacher_id).await
            }
        },
    }
}
