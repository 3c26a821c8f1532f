use thiserror::Error;

/// Errors raised while handling a single gateway event or command.
///
/// These never escape the event handler: the dispatcher logs them and turns them
/// into an error reply, guild event handlers only log them.
#[derive(Error, Debug)]
pub enum BotError {
    /// Discord rejected an API call (missing permissions, unknown channel, ...).
    ///
    /// Boxed due to the size of `serenity::Error`.
    #[error("Discord API error: {0}")]
    Platform(#[source] Box<serenity::Error>),

    /// A database operation failed.
    #[error("Database error: {0}")]
    Persistence(#[from] sea_orm::DbErr),

    /// An outbound call did not complete within the configured deadline.
    #[error("{operation} timed out after {seconds}s")]
    Timeout {
        /// Short description of the call that timed out
        operation: &'static str,
        /// Deadline that expired, in whole seconds
        seconds: u64,
    },

    /// A guild-only command was used outside of a guild.
    #[error("This command can only be used in a server")]
    NotInGuild,

    /// The invoking member lacks a permission the command requires.
    #[error("You need the {0} permission to use this command")]
    MissingPermission(&'static str),
}

impl From<serenity::Error> for BotError {
    fn from(err: serenity::Error) -> Self {
        BotError::Platform(Box::new(err))
    }
}

impl BotError {
    /// Message shown to the Discord user for this error.
    ///
    /// Discord errors are shown verbatim since they usually name the missing
    /// permission. Database details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Platform(err) => err.to_string(),
            Self::Persistence(_) => "the database could not be reached".to_string(),
            Self::Timeout { .. } => "the request took too long, please try again".to_string(),
            Self::NotInGuild | Self::MissingPermission(_) => self.to_string(),
        }
    }
}
