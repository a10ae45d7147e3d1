pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const NAV: &str = "fixed top-0 z-40 w-full bg-white/60 dark:bg-gray-700/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const NAV_CONTENT: &str = "h-16 px-4 sm:px-6 lg:px-8 flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-gray-900 dark:text-white hover:text-orange-500 transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-orange-500 transition-colors duration-200";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-orange-500 rounded-lg transition-colors duration-200";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const CARD_SUCCESS: &str = "bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg p-4 text-green-700 dark:text-green-200";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-orange-500 to-pink-500 hover:from-orange-600 hover:to-pink-600 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-50";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800 disabled:opacity-50";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-orange-500";
pub const FORM: &str = "mt-4 space-y-4";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_SECONDARY: &str = "text-gray-600 dark:text-gray-400";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";
pub const LINK: &str = "text-orange-600 dark:text-orange-400 hover:text-orange-700 transition-colors duration-200";
pub const AUTH_CARD: &str = "bg-white/80 dark:bg-gray-900/80 rounded-xl shadow-xl p-8 max-w-md w-full mx-auto backdrop-blur-lg border border-gray-200/50 dark:border-gray-700/50";
pub const TABLE: &str = "min-w-full divide-y divide-gray-200 dark:divide-gray-700 text-sm";
pub const TABLE_HEAD: &str = "px-4 py-3 text-left font-semibold text-gray-700 dark:text-gray-200 cursor-pointer select-none";
pub const TABLE_CELL: &str = "px-4 py-2 text-gray-700 dark:text-gray-300 whitespace-nowrap";
pub const LOADING_SPINNER: &str = "animate-spin rounded-full h-8 w-8 border-4 border-orange-500 border-t-transparent";
