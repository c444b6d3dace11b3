mod toasts;
