use actix_web::{
    cookie::Cookie,
    get,
    http::{
        header::{self, ContentDisposition, DispositionParam, DispositionType},
        StatusCode,
    },
    post, web, HttpRequest, HttpResponse, Responder, ResponseError,
};
use database::{
    consts::consts::{EntityId, DEFAULT_PAGE, DEFAULT_RECORDS_PER_PAGE},
    controller::{
        birth_year::BirthYearOption,
        rookies::{Navigation, RookiesController},
    },
    export::{ExportError, ExportFormat},
    model::{form::PersonForm, person::Person},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const LISTING_PATH: &str = "/nashtech/rookies";
const CONFIRM_DELETE_PATH: &str = "/nashtech/rookies/confirm-delete";

/// One-shot value read (and cleared) by the confirmation view
const PERSON_NAME_COOKIE: &str = "person_name";

/// Static paths go first, otherwise `/{id}` would claim them
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(create)
        .service(oldest_member)
        .service(male_members)
        .service(full_name)
        .service(birth_year)
        .service(older)
        .service(younger)
        .service(equal)
        .service(export)
        .service(confirm_delete)
        .service(details)
        .service(edit_view)
        .service(edit)
        .service(delete_view)
        .service(delete_person);
}

#[derive(Deserialize, Debug)]
struct IndexQuery {
    page: Option<i64>,
    record_per_page: Option<i64>,
}

#[derive(Deserialize, Debug)]
struct BirthYearQuery {
    #[serde(default)]
    option: String,
}

#[derive(Deserialize, Debug)]
struct ExportQuery {
    format: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ConfirmDeleteView {
    person_name: Option<String>,
}

#[derive(Debug)]
struct ExportFailure(ExportError);

impl std::fmt::Display for ExportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for ExportFailure {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            ExportError::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
            ExportError::Spreadsheet(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn navigate(navigation: Navigation) -> HttpResponse {
    match navigation {
        Navigation::Listing => see_other(LISTING_PATH),
        Navigation::ConfirmDelete { person_name } => {
            let cookie = Cookie::build(PERSON_NAME_COOKIE, person_name)
                .path(LISTING_PATH)
                .http_only(true)
                .finish();

            // Requests parse cookies percent-decoded, so the value must be
            // written encoded to survive `;`, `%` and control characters
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, CONFIRM_DELETE_PATH))
                .append_header((header::SET_COOKIE, cookie.encoded().to_string()))
                .finish()
        }
    }
}

fn found(person: Option<Person>) -> HttpResponse {
    match person {
        Some(person) => HttpResponse::Ok().json(person),
        None => HttpResponse::NotFound().finish(),
    }
}

#[get("/nashtech/rookies")]
async fn index(
    controller: web::Data<RookiesController>,
    query: web::Query<IndexQuery>,
) -> impl Responder {
    let view = controller.index(
        query.page.unwrap_or(DEFAULT_PAGE),
        query.record_per_page.unwrap_or(DEFAULT_RECORDS_PER_PAGE),
    );

    HttpResponse::Ok().json(view)
}

#[post("/nashtech/rookies")]
async fn create(
    controller: web::Data<RookiesController>,
    form: web::Json<PersonForm>,
) -> impl Responder {
    navigate(controller.create(form.into_inner()))
}

#[get("/nashtech/rookies/oldest-member")]
async fn oldest_member(controller: web::Data<RookiesController>) -> impl Responder {
    HttpResponse::Ok().json(controller.oldest_members_now())
}

#[get("/nashtech/rookies/male-members")]
async fn male_members(controller: web::Data<RookiesController>) -> impl Responder {
    HttpResponse::Ok().json(controller.male_members())
}

#[get("/nashtech/rookies/full-name")]
async fn full_name(controller: web::Data<RookiesController>) -> impl Responder {
    HttpResponse::Ok().json(controller.full_names())
}

#[get("/nashtech/rookies/birth-year")]
async fn birth_year(
    controller: web::Data<RookiesController>,
    query: web::Query<BirthYearQuery>,
) -> impl Responder {
    let option = controller.birth_year(&query.option);

    see_other(&format!("{}/{}", LISTING_PATH, option))
}

#[get("/nashtech/rookies/older")]
async fn older(controller: web::Data<RookiesController>) -> impl Responder {
    HttpResponse::Ok().json(controller.born(BirthYearOption::Older))
}

#[get("/nashtech/rookies/younger")]
async fn younger(controller: web::Data<RookiesController>) -> impl Responder {
    HttpResponse::Ok().json(controller.born(BirthYearOption::Younger))
}

#[get("/nashtech/rookies/equal")]
async fn equal(controller: web::Data<RookiesController>) -> impl Responder {
    HttpResponse::Ok().json(controller.born(BirthYearOption::Equal))
}

#[get("/nashtech/rookies/export")]
async fn export(
    controller: web::Data<RookiesController>,
    query: web::Query<ExportQuery>,
) -> Result<HttpResponse, ExportFailure> {
    let format = match &query.format {
        Some(format) => ExportFormat::parse(format).map_err(ExportFailure)?,
        None => ExportFormat::default(),
    };

    let file = controller.export(format).map_err(|err| {
        log::error!("Export failed: {}", err);
        ExportFailure(err)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(file.content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file.file_name)],
        })
        .body(file.bytes))
}

#[get("/nashtech/rookies/confirm-delete")]
async fn confirm_delete(request: HttpRequest) -> impl Responder {
    let person_name = request
        .cookie(PERSON_NAME_COOKIE)
        .map(|cookie| cookie.value().to_string());

    let mut response = HttpResponse::Ok();

    if person_name.is_some() {
        let mut removal = Cookie::build(PERSON_NAME_COOKIE, "")
            .path(LISTING_PATH)
            .finish();
        removal.make_removal();

        response.cookie(removal);
    }

    response.json(ConfirmDeleteView { person_name })
}

#[get("/nashtech/rookies/{id}")]
async fn details(
    controller: web::Data<RookiesController>,
    id: web::Path<Uuid>,
) -> impl Responder {
    found(controller.details(&EntityId(id.into_inner())))
}

#[get("/nashtech/rookies/{id}/edit")]
async fn edit_view(
    controller: web::Data<RookiesController>,
    id: web::Path<Uuid>,
) -> impl Responder {
    found(controller.edit_view(&EntityId(id.into_inner())))
}

#[post("/nashtech/rookies/{id}/edit")]
async fn edit(
    controller: web::Data<RookiesController>,
    id: web::Path<Uuid>,
    form: web::Json<PersonForm>,
) -> impl Responder {
    let mut form = form.into_inner();
    form.id = Some(EntityId(id.into_inner()));

    navigate(controller.edit(form))
}

#[get("/nashtech/rookies/{id}/delete")]
async fn delete_view(
    controller: web::Data<RookiesController>,
    id: web::Path<Uuid>,
) -> impl Responder {
    found(controller.delete_view(&EntityId(id.into_inner())))
}

#[post("/nashtech/rookies/{id}/delete")]
async fn delete_person(
    controller: web::Data<RookiesController>,
    id: web::Path<Uuid>,
) -> impl Responder {
    navigate(controller.delete_person(&EntityId(id.into_inner())))
}
