//! Tab Selector

/// The three tabs of the advanced page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    TodoList,
    Settings,
    About,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::TodoList, Tab::Settings, Tab::About];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::TodoList => "tab1",
            Tab::Settings => "tab2",
            Tab::About => "tab3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::TodoList => "Todo List",
            Tab::Settings => "Settings",
            Tab::About => "About",
        }
    }
}
