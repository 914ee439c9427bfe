use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub id: u64,
    pub text: String,
    pub level: NoticeLevel,
}

/// Short-lived messages shown in the corner of the screen.
#[derive(Clone, Copy)]
pub struct Notices {
    list: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notices {
    pub fn info(&self, text: impl Into<String>) {
        self.push(text.into(), NoticeLevel::Info);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(text.into(), NoticeLevel::Error);
    }

    fn push(&self, text: String, level: NoticeLevel) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.list.update(|list| list.push(Notice { id, text, level }));

        let list = self.list;
        set_timeout(
            move || list.update(|list| list.retain(|n| n.id != id)),
            std::time::Duration::from_secs(4),
        );
    }
}

fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "notice notice-info",
        NoticeLevel::Error => "notice notice-error",
    }
}

pub fn use_notices() -> Notices {
    expect_context::<Notices>()
}

/// Provides [`Notices`] to its children and renders the active ones.
#[component]
pub fn NoticeProvider(children: Children) -> impl IntoView {
    let notices = Notices {
        list: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(notices);
    let list = notices.list;

    view! {
        {children()}
        <div class="notice-container">
            <For each=move || list.get() key=|notice| notice.id let:notice>
                <div class=notice_class(notice.level)>{notice.text.clone()}</div>
            </For>
        </div>
    }
}
