use super::Command;

impl Command {
    /// All commands in registration order.
    pub const ALL: [Command; 10] = [
        Command::FreezePath,
        Command::Freeze,
        Command::Download,
        Command::Docs,
        Command::Save,
        Command::Advanced,
        Command::Code,
        Command::Share,
        Command::Group,
        Command::Minimize,
    ];

    /// Config key for this command's chord.
    pub fn name(&self) -> &'static str {
        match self {
            Command::FreezePath => "freeze_path",
            Command::Freeze => "freeze",
            Command::Download => "download",
            Command::Docs => "docs",
            Command::Save => "save",
            Command::Advanced => "advanced",
            Command::Code => "code",
            Command::Share => "share",
            Command::Group => "group",
            Command::Minimize => "minimize",
        }
    }

    /// Human-readable label for toolbar tooltips and menus.
    pub fn label(&self) -> &'static str {
        match self {
            Command::FreezePath => "Freeze Path",
            Command::Freeze => "Freeze",
            Command::Download => "Download",
            Command::Docs => "Docs",
            Command::Save => "Changes Save",
            Command::Advanced => "Advanced Settings",
            Command::Code => "Code",
            Command::Share => "Component Share",
            Command::Group => "Group",
            Command::Minimize => "Minimize",
        }
    }

    /// Reverse of [`Command::name`].
    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.name() == name)
    }
}
