//! メインアプリケーションコンポーネント

use crate::components::{
    back_to_top::BackToTop,
    contact::ContactSection,
    footer::Footer,
    header::Header,
    hero::Hero,
    login_modal::LoginModal,
    project_modal::ProjectModal,
    projects::ProjectsSection,
    statistics::Statistics,
    toast::ToastStack,
    upload_modal::UploadModal,
};
use crate::{dom, store::BrowserStore};
use emaar_common::{
    publish, Catalog, Error, FilterOutcome, ImageUpload, ModalGeneration, ModalTicket, Project,
    ProjectFilter, Result, SharedSecretGate, SiteConfig, UploadDraft, UploadOutcome,
    UploadRequest, WorkerSession,
};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// トースト種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

/// サイト全体の状態
///
/// カタログ・フィルタ・ワーカー状態をまとめて持ち、コンテキスト経由で各コンポーネントに渡す。
#[derive(Clone, Copy)]
pub struct SiteController {
    config: StoredValue<SiteConfig>,
    pub catalog: RwSignal<Catalog>,
    pub filter: RwSignal<ProjectFilter>,
    pub session: RwSignal<WorkerSession>,
    /// 詳細モーダルに表示中のプロジェクト
    pub selected: RwSignal<Option<Project>>,
    pub modal_active: RwSignal<bool>,
    pub login_open: RwSignal<bool>,
    pub upload_open: RwSignal<bool>,
    pub menu_open: RwSignal<bool>,
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
    modal_generation: StoredValue<ModalGeneration>,
}

impl SiteController {
    pub fn new(config: SiteConfig) -> Self {
        let store = BrowserStore;
        let catalog = Catalog::load(&store, &config.storage.projects);
        let session = WorkerSession::restore(&store, &config.storage, &config.default_worker_name);
        tracing::info!(
            projects = catalog.len(),
            worker = session.is_logged_in(),
            "state restored"
        );

        Self {
            config: StoredValue::new(config),
            catalog: RwSignal::new(catalog),
            filter: RwSignal::new(ProjectFilter::default()),
            session: RwSignal::new(session),
            selected: RwSignal::new(None),
            modal_active: RwSignal::new(false),
            login_open: RwSignal::new(false),
            upload_open: RwSignal::new(false),
            menu_open: RwSignal::new(false),
            toasts: RwSignal::new(Vec::new()),
            next_toast_id: StoredValue::new(0),
            modal_generation: StoredValue::new(ModalGeneration::default()),
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    /// 現在のフィルタ結果（リアクティブ）
    pub fn outcome(&self) -> FilterOutcome {
        self.filter
            .with(|filter| self.catalog.with(|catalog| filter.apply(catalog.projects())))
    }

    pub fn can_manage_projects(&self) -> bool {
        self.session.with(WorkerSession::can_manage_projects)
    }

    pub fn worker_name(&self) -> Option<String> {
        self.session.with(|s| s.username().map(str::to_string))
    }

    // ---------------------------------------------
    // カタログ操作
    // ---------------------------------------------

    /// アップロード内容を先頭に追加して保存
    ///
    /// `image` はメイン画像の読み込み結果。検証・読み込みの失敗は何も変えずに返す。
    /// 保存失敗はトーストで通知するだけで、追加自体は成功扱い。
    pub fn add_project(
        &self,
        draft: UploadDraft,
        image: Option<Result<ImageUpload>>,
    ) -> Result<Project> {
        let request = UploadRequest {
            draft,
            image,
            uploaded_by: self.worker_name(),
            now_ms: dom::now_ms(),
            date: dom::locale_date_string(),
        };
        let key = self.config.with_value(|c| c.storage.projects.clone());

        let mut catalog = self.catalog.get_untracked();
        let mut filter = self.filter.get_untracked();
        let outcome = publish(&mut catalog, &mut filter, &mut BrowserStore, &key, request)?;
        self.catalog.set(catalog);
        self.filter.set(filter);

        if let UploadOutcome::Unsaved { error, .. } = &outcome {
            self.report_save_error(error);
        }
        Ok(outcome.into_project())
    }

    /// 確認ダイアログの後に削除
    pub fn delete_project(&self, id: u64) {
        if !gloo::dialogs::confirm("Are you sure you want to delete this project?") {
            return;
        }

        let mut removed = None;
        self.catalog.update(|c| removed = c.remove(id));
        if removed.is_some() {
            self.persist_catalog();
            self.notify("Project deleted", ToastKind::Success);
        }
    }

    fn persist_catalog(&self) {
        let key = self.config.with_value(|c| c.storage.projects.clone());
        let result = self
            .catalog
            .with_untracked(|c| c.save(&mut BrowserStore, &key));

        if let Err(e) = result {
            tracing::error!(error = %e, "failed to persist catalog");
            self.report_save_error(&e);
        }
    }

    fn report_save_error(&self, error: &Error) {
        match error {
            Error::StorageWrite { .. } => {
                self.notify("Storage full! Delete some projects.", ToastKind::Error)
            }
            other => self.notify_error(other),
        }
    }

    // ---------------------------------------------
    // ワーカーモード
    // ---------------------------------------------

    pub fn login(&self, username: &str, secret: &str) -> Result<()> {
        let config = self.config();
        let gate = SharedSecretGate::new(config.worker_secret.clone());
        let mut session = self.session.get_untracked();
        session.login(
            &gate,
            &mut BrowserStore,
            &config.storage,
            username,
            secret,
            &config.default_worker_name,
        )?;
        self.session.set(session);
        Ok(())
    }

    pub fn logout(&self) {
        let keys = self.config.with_value(|c| c.storage.clone());
        self.session.update(|s| s.logout(&mut BrowserStore, &keys));
        self.upload_open.set(false);
        self.notify("Logged out of worker mode", ToastKind::Info);
    }

    // ---------------------------------------------
    // 詳細モーダル
    // ---------------------------------------------

    pub fn open_project(&self, project: Project) {
        let ticket = advance(self.modal_generation);
        self.selected.set(Some(project));
        dom::lock_body_scroll(true);

        let generation = self.modal_generation;
        let modal_active = self.modal_active;
        spawn_local(async move {
            TimeoutFuture::new(10).await;
            if generation.with_value(|g| g.is_current(ticket)) {
                modal_active.set(true);
            }
        });
    }

    pub fn close_project(&self) {
        let ticket = advance(self.modal_generation);
        self.modal_active.set(false);
        dom::lock_body_scroll(false);

        let generation = self.modal_generation;
        let selected = self.selected;
        spawn_local(async move {
            TimeoutFuture::new(300).await;
            // 閉じている間に別のプロジェクトが開かれた場合は残す
            if generation.with_value(|g| g.is_current(ticket)) {
                selected.set(None);
            }
        });
    }

    // ---------------------------------------------
    // 通知
    // ---------------------------------------------

    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id.wrapping_add(1));

        let message = message.into();
        match kind {
            ToastKind::Error => tracing::warn!(message = %message, "toast"),
            _ => tracing::debug!(message = %message, "toast"),
        }
        self.toasts.update(|t| t.push(Toast { id, message, kind }));

        let toasts = self.toasts;
        let duration = self.config.with_value(|c| c.toast_duration_ms);
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            toasts.update(|t| t.retain(|toast| toast.id != id));
        });
    }

    pub fn notify_error(&self, error: &Error) {
        self.notify(error.to_string(), ToastKind::Error);
    }
}

/// モーダルの世代を進めて新しいチケットを得る
fn advance(generation: StoredValue<ModalGeneration>) -> ModalTicket {
    let mut current = generation.get_value();
    let ticket = current.advance();
    generation.set_value(current);
    ticket
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let controller = SiteController::new(config);
    provide_context(controller);

    view! {
        <Header />
        <main id="main-content">
            <Hero />
            <ProjectsSection />
            <Statistics />
            <ContactSection />
        </main>
        <Footer />

        <ProjectModal />
        <LoginModal />
        <UploadModal />
        <ToastStack />
        <BackToTop />
    }
}
