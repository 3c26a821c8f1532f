mod guild;
mod webhook;
